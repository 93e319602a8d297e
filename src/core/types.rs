use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Canonical weekday numbering for the whole crate: Monday=0 through
/// Sunday=6. Every boundary that speaks day numbers goes through
/// `index`/`try_from_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum DayOfWeek {
    #[strum(
        serialize = "mon",
        serialize = "monday",
        serialize = "lunes",
        to_string = "MON"
    )]
    Mon,
    #[strum(
        serialize = "tue",
        serialize = "tuesday",
        serialize = "martes",
        to_string = "TUE"
    )]
    Tue,
    #[strum(
        serialize = "wed",
        serialize = "wednesday",
        serialize = "miercoles",
        to_string = "WED"
    )]
    Wed,
    #[strum(
        serialize = "thu",
        serialize = "thursday",
        serialize = "jueves",
        to_string = "THU"
    )]
    Thu,
    #[strum(
        serialize = "fri",
        serialize = "friday",
        serialize = "viernes",
        to_string = "FRI"
    )]
    Fri,
    #[strum(
        serialize = "sat",
        serialize = "saturday",
        serialize = "sabado",
        to_string = "SAT"
    )]
    Sat,
    #[strum(
        serialize = "sun",
        serialize = "sunday",
        serialize = "domingo",
        to_string = "SUN"
    )]
    Sun,
}

impl DayOfWeek {
    pub const COUNT: usize = 7;

    pub fn try_from(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_str(s).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{s}'. Valid days: {}",
                valid_csv::<DayOfWeek>()
            ))
        })
    }

    /// Monday-first position, 0..=6.
    pub fn index(self) -> u8 {
        match self {
            DayOfWeek::Mon => 0,
            DayOfWeek::Tue => 1,
            DayOfWeek::Wed => 2,
            DayOfWeek::Thu => 3,
            DayOfWeek::Fri => 4,
            DayOfWeek::Sat => 5,
            DayOfWeek::Sun => 6,
        }
    }

    pub fn try_from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(DayOfWeek::Mon),
            1 => Ok(DayOfWeek::Tue),
            2 => Ok(DayOfWeek::Wed),
            3 => Ok(DayOfWeek::Thu),
            4 => Ok(DayOfWeek::Fri),
            5 => Ok(DayOfWeek::Sat),
            6 => Ok(DayOfWeek::Sun),
            other => Err(Error::Parse(format!(
                "Invalid day-of-week number: {other}. Expected 0 (Monday) through 6 (Sunday)."
            ))),
        }
    }

    /// Full name as shown in read-only schedule views.
    pub fn display_name(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Lunes",
            DayOfWeek::Tue => "Martes",
            DayOfWeek::Wed => "Miércoles",
            DayOfWeek::Thu => "Jueves",
            DayOfWeek::Fri => "Viernes",
            DayOfWeek::Sat => "Sábado",
            DayOfWeek::Sun => "Domingo",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Sat | DayOfWeek::Sun)
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DayOfWeek, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DayOfWeek::try_from(&s).map_err(serde::de::Error::custom)
    }
}

/// Minute-of-day wall-clock time. Wire values come in as "HH:MM" or
/// "HH:MM:SS"; seconds are truncated, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn try_from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= 24 * 60 {
            return Err(Error::Parse(format!(
                "Minute-of-day {minutes} is out of range (0..1440)."
            )));
        }
        Ok(TimeOfDay(minutes))
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.split(':');
        let (hour, minute) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), seconds, None) => {
                let hour: u16 = h.parse().map_err(|_| Error::time_format(s))?;
                let minute: u16 = m.parse().map_err(|_| Error::time_format(s))?;
                if let Some(sec) = seconds {
                    // Truncated, but still has to look like seconds.
                    let sec: u16 = sec.parse().map_err(|_| Error::time_format(s))?;
                    if sec >= 60 {
                        return Err(Error::time_format(s));
                    }
                }
                (hour, minute)
            }
            _ => return Err(Error::time_format(s)),
        };
        if hour >= 24 || minute >= 60 {
            return Err(Error::time_format(s));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TimeOfDay, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One availability window within a day. Construction is unchecked:
/// the editor lets windows pass through transiently invalid states and
/// validation happens explicitly before save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        TimeWindow { start, end }
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid window format: '{}'. Expected '<start>-<end>'.",
                s
            ))
        })?;
        Ok(TimeWindow {
            start: TimeOfDay::try_from_str(start)?,
            end: TimeOfDay::try_from_str(end)?,
        })
    }

    /// Derived capacity; `None` while the window is inverted or empty.
    pub fn duration_minutes(&self) -> Option<u32> {
        if self.end > self.start {
            Some(u32::from(self.end.minutes() - self.start.minutes()))
        } else {
            None
        }
    }

    /// Half-open interval intersection: [start, end).
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Serialize for TimeWindow {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeWindow {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<TimeWindow, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        TimeWindow::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
