use core::fmt;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1000;

/// A millisecond duration split into display fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FormattedTime {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub milliseconds: u16,
}

impl FormattedTime {
    pub fn from_ms(ms: u64) -> Self {
        Self {
            hours: ms / MS_PER_HOUR,
            minutes: ((ms / MS_PER_MINUTE) % 60) as u8,
            seconds: ((ms / MS_PER_SECOND) % 60) as u8,
            milliseconds: (ms % MS_PER_SECOND) as u16,
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.hours * MS_PER_HOUR
            + self.minutes as u64 * MS_PER_MINUTE
            + self.seconds as u64 * MS_PER_SECOND
            + self.milliseconds as u64
    }
}

/// Renders as "HH:MM:SS.mmm". Hours widen past two digits.
impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

pub fn format(ms: u64) -> FormattedTime {
    FormattedTime::from_ms(ms)
}

/// Format milliseconds as "HH:MM:SS.mmm"
pub fn format_hms_ms(ms: u64) -> String {
    format(ms).to_string()
}
