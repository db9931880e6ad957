use num_traits::{FromPrimitive, ToPrimitive};
use stopwatch_core::{Scheduler, TickToken, DEFAULT_TICK_INTERVAL_MS};

use crate::api::{AppOp, PumpOp};

/// `Scheduler` backed by the pump thread. Ticks arrive at the main server
/// as `AppOp::Pump` carrying the token they were scheduled with.
pub struct PumpScheduler {
    conn: xous::CID,
}

impl PumpScheduler {
    pub fn new(pump_sid: xous::SID) -> Self {
        let conn = xous::connect(pump_sid).expect("can't connect to pump");
        Self { conn }
    }

    pub fn quit(&self) {
        self.send(PumpOp::Quit, 0, 0);
    }

    fn send(&self, op: PumpOp, arg1: usize, arg2: usize) {
        let id = op.to_usize().unwrap_or(usize::MAX);
        let msg = xous::Message::new_scalar(id, arg1, arg2, 0, 0);
        if let Err(e) = xous::send_message(self.conn, msg) {
            log::error!("pump message {:?} failed: {:?}", op, e);
        }
    }
}

impl Scheduler for PumpScheduler {
    fn schedule_repeating(&mut self, interval_ms: u64, token: TickToken) {
        log::debug!("pump start every {}ms, token {}", interval_ms, token.0);
        self.send(PumpOp::Start, interval_ms as usize, token.0 as usize);
    }

    fn cancel(&mut self, token: TickToken) {
        log::debug!("pump stop, token {}", token.0);
        self.send(PumpOp::Stop, token.0 as usize, 0);
    }
}

pub fn pump_thread(pump_sid: xous::SID, main_conn: xous::CID) {
    let tt = ticktimer_server::Ticktimer::new().unwrap();
    let pump_id = AppOp::Pump.to_usize().unwrap();
    let mut interval_ms = DEFAULT_TICK_INTERVAL_MS;
    let mut token = 0usize;
    let mut running = false;

    loop {
        if running {
            tt.sleep_ms(interval_ms as usize).ok();
            xous::send_message(
                main_conn,
                xous::Message::new_scalar(pump_id, token, 0, 0, 0),
            ).ok();
        }

        // Non-blocking while running, block-wait while idle
        let envelope = if running {
            match xous::try_receive_message(pump_sid) {
                Ok(Some(env)) => Some(env),
                _ => None,
            }
        } else {
            xous::receive_message(pump_sid).ok()
        };

        if let Some(env) = envelope {
            if let xous::Message::Scalar(scalar) = &env.body {
                match FromPrimitive::from_usize(scalar.id) {
                    Some(PumpOp::Start) => {
                        interval_ms = scalar.arg1 as u64;
                        if interval_ms == 0 { interval_ms = DEFAULT_TICK_INTERVAL_MS; }
                        token = scalar.arg2;
                        running = true;
                    }
                    Some(PumpOp::Stop) => {
                        // a late stop for an earlier run must not halt the current one
                        if scalar.arg1 == token {
                            running = false;
                        }
                    }
                    Some(PumpOp::Quit) => break,
                    None => log::warn!("pump: unknown opcode {}", scalar.id),
                }
            }
        }
    }
    log::info!("pump thread exiting");
}
