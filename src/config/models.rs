use crate::core::types::{Bool, DayOfWeek, TimeWindow};
use crate::errors::Error;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical 09:00-18:00 window used wherever a fresh default is needed.
pub static DEFAULT_WINDOW: Lazy<TimeWindow> =
    Lazy::new(|| TimeWindow::try_from_str("09:00-18:00").unwrap());

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

/// The single window a day receives when it is first switched on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultWindowConfigItem {
    pub value: TimeWindow,
    pub description: String,
}

impl Default for DefaultWindowConfigItem {
    fn default() -> Self {
        Self {
            value: *DEFAULT_WINDOW,
            description: "Window applied when a day is enabled for the first time.".into(),
        }
    }
}

impl ConfigItem<TimeWindow> for DefaultWindowConfigItem {
    fn get_value(&self) -> &TimeWindow {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let window = TimeWindow::try_from_str(new_value)?;
        if window.duration_minutes().is_none() {
            return Err(Error::parse(format!(
                "Default window '{}' must end after it starts.",
                window
            )));
        }
        self.value = window;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Days enabled by the first-ever-load schedule template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultOpenDaysConfigItem {
    pub value: Vec<DayOfWeek>,
    pub description: String,
}

impl Default for DefaultOpenDaysConfigItem {
    fn default() -> Self {
        Self {
            value: vec![
                DayOfWeek::Mon,
                DayOfWeek::Tue,
                DayOfWeek::Wed,
                DayOfWeek::Thu,
                DayOfWeek::Fri,
            ],
            description: "Days enabled in the default schedule template.".into(),
        }
    }
}

impl ConfigItem<Vec<DayOfWeek>> for DefaultOpenDaysConfigItem {
    fn get_value(&self) -> &Vec<DayOfWeek> {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let mut days = Vec::new();
        for token in new_value.split(',') {
            let day = DayOfWeek::try_from(token)?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        days.sort_by_key(|d| d.index());
        self.value = days;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
