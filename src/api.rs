pub const SERVER_NAME: &str = "_Stopwatch_";

/// Opcodes accepted by the stopwatch server.
///
/// `Start`, `Stop`, `Reset`, `Lap` and `ToggleTheme` are plain scalars.
/// The `Get*` opcodes are blocking scalars; 64-bit values come back as
/// `Scalar2(low, high)`.
#[derive(Debug, num_derive::FromPrimitive, num_derive::ToPrimitive)]
pub enum AppOp {
    Start = 0,
    Stop,
    Reset,
    Lap,
    ToggleTheme,
    /// -> Scalar2(elapsed_lo, elapsed_hi)
    GetElapsed,
    /// -> Scalar1(count)
    GetLapCount,
    /// arg1 = 1-based lap index -> Scalar2(elapsed_lo, elapsed_hi),
    /// all ones when there is no such lap
    GetLap,
    /// -> Scalar1(0 light, 1 dark)
    GetTheme,
    /// -> Scalar1(0 stopped, 1 running)
    GetState,
    /// -> Scalar1(bitmask of enabled controls, see `view::CONTROL_*`)
    GetControls,
    /// From the pump thread; arg1 = tick token
    Pump,
    Quit,
}

/// Opcodes accepted by the pump thread.
#[derive(Debug, num_derive::FromPrimitive, num_derive::ToPrimitive)]
pub enum PumpOp {
    /// arg1 = interval in ms, arg2 = tick token
    Start = 0,
    /// arg1 = tick token
    Stop,
    Quit,
}
