#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

mod api;
mod pump;
mod storage;
mod view;

use num_traits::FromPrimitive;
use stopwatch_core::{
    split_u64, Clock, StopwatchConfig, StopwatchWidget, Theme, ThemeController,
    TickToken, TimerState, DEFAULT_TICK_INTERVAL_MS,
};

use crate::api::{AppOp, SERVER_NAME};
use crate::pump::{pump_thread, PumpScheduler};
use crate::storage::FileThemeStore;
use crate::view::LogView;

const THEME_FILE: &str = "stopwatch.prefs";

struct TicktimerClock {
    tt: ticktimer_server::Ticktimer,
}

impl Clock for TicktimerClock {
    fn now_ms(&self) -> u64 {
        self.tt.elapsed_ms()
    }
}

struct StopwatchApp {
    widget: StopwatchWidget<TicktimerClock, PumpScheduler, LogView>,
    theme: ThemeController<FileThemeStore>,
}

impl StopwatchApp {
    fn new(pump_sid: xous::SID) -> Self {
        let clock = TicktimerClock {
            tt: ticktimer_server::Ticktimer::new().expect("can't connect to ticktimer"),
        };
        let config = StopwatchConfig { tick_interval_ms: DEFAULT_TICK_INTERVAL_MS };
        let mut widget = StopwatchWidget::new(
            clock,
            PumpScheduler::new(pump_sid),
            LogView::new(),
            config,
        );
        widget.init();

        let theme = ThemeController::load(FileThemeStore::new(THEME_FILE));
        log::info!("theme {} {}", theme.theme().as_str(), theme.theme().icon());

        Self { widget, theme }
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        log::info!("theme {} {}", theme.as_str(), theme.icon());
    }

    fn lap_elapsed(&self, index: usize) -> Option<u64> {
        let entries = self.widget.engine().laps().entries();
        index
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .map(|e| e.elapsed_at_lap_ms())
    }

    fn quit(&mut self) {
        self.widget.stop();
        self.widget.scheduler().quit();
        log::info!("stopped at {}", self.widget.view().display());
    }
}

fn main() -> ! {
    log_server::init_wait().unwrap();
    log::set_max_level(log::LevelFilter::Info);
    log::info!("Stopwatch PID is {}", xous::process::id());

    let xns = xous_names::XousNames::new().unwrap();
    let sid = xns.register_name(SERVER_NAME, None).expect("can't register server");
    let main_conn = xous::connect(sid).expect("can't connect to self");

    // Create pump thread
    let pump_sid = xous::create_server().expect("can't create pump server");
    std::thread::spawn(move || {
        pump_thread(pump_sid, main_conn);
    });

    let mut app = StopwatchApp::new(pump_sid);

    loop {
        let msg = xous::receive_message(sid).unwrap();
        match FromPrimitive::from_usize(msg.body.id()) {
            Some(AppOp::Start) => app.widget.start(),
            Some(AppOp::Stop) => app.widget.stop(),
            Some(AppOp::Reset) => app.widget.reset(),
            Some(AppOp::Lap) => app.widget.lap(),
            Some(AppOp::ToggleTheme) => app.toggle_theme(),
            Some(AppOp::GetElapsed) => xous::msg_blocking_scalar_unpack!(msg, _, _, _, _, {
                let (lo, hi) = split_u64(app.widget.engine().current_elapsed_ms());
                xous::return_scalar2(msg.sender, lo, hi).ok();
            }),
            Some(AppOp::GetLapCount) => xous::msg_blocking_scalar_unpack!(msg, _, _, _, _, {
                xous::return_scalar(msg.sender, app.widget.engine().laps().len()).ok();
            }),
            Some(AppOp::GetLap) => xous::msg_blocking_scalar_unpack!(msg, index, _, _, _, {
                let elapsed = app.lap_elapsed(index).unwrap_or(u64::MAX);
                let (lo, hi) = split_u64(elapsed);
                xous::return_scalar2(msg.sender, lo, hi).ok();
            }),
            Some(AppOp::GetTheme) => xous::msg_blocking_scalar_unpack!(msg, _, _, _, _, {
                let code = match app.theme.theme() {
                    Theme::Light => 0,
                    Theme::Dark => 1,
                };
                xous::return_scalar(msg.sender, code).ok();
            }),
            Some(AppOp::GetState) => xous::msg_blocking_scalar_unpack!(msg, _, _, _, _, {
                let code = match app.widget.engine().state() {
                    TimerState::Stopped => 0,
                    TimerState::Running => 1,
                };
                xous::return_scalar(msg.sender, code).ok();
            }),
            Some(AppOp::GetControls) => xous::msg_blocking_scalar_unpack!(msg, _, _, _, _, {
                xous::return_scalar(msg.sender, app.widget.view().controls_mask()).ok();
            }),
            Some(AppOp::Pump) => xous::msg_scalar_unpack!(msg, token, _, _, _, {
                app.widget.on_tick(TickToken(token as u32));
            }),
            Some(AppOp::Quit) => break,
            None => log::error!("unknown opcode: {:?}", msg),
        }
    }

    // Clean up
    app.quit();
    xns.unregister_server(sid).unwrap();
    unsafe { xous::destroy_server(sid) }.unwrap();
    xous::terminate_process(0)
}
