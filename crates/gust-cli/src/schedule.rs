use gust_wind::Weather;

/// Weather over time: each entry applies from its tick until the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSchedule {
    entries: Vec<(u64, Weather)>,
}

impl WeatherSchedule {
    /// The same weather for the whole run.
    pub fn constant(weather: Weather) -> Self {
        Self {
            entries: vec![(0, weather)],
        }
    }

    /// Parse `TICK:WEATHER` pairs separated by commas.
    ///
    /// Ticks before the first entry use clear weather.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut entries = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (tick, weather) = part
                .split_once(':')
                .ok_or_else(|| format!("schedule entry '{part}' is not TICK:WEATHER"))?;
            let tick: u64 = tick
                .trim()
                .parse()
                .map_err(|_| format!("invalid tick in schedule entry '{part}'"))?;
            let weather = weather
                .parse::<Weather>()
                .map_err(|e| e.to_string())?;
            entries.push((tick, weather));
        }
        if entries.is_empty() {
            return Err("schedule is empty".into());
        }
        entries.sort_by_key(|(tick, _)| *tick);
        Ok(Self { entries })
    }

    /// Weather in effect at `tick`.
    pub fn weather_at(&self, tick: u64) -> Weather {
        self.entries
            .iter()
            .take_while(|(start, _)| *start <= tick)
            .last()
            .map(|(_, weather)| *weather)
            .unwrap_or_default()
    }
}
