use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const HOUR_MS: i64 = 60 * 60 * 1000;
const MINUTE_MS: i64 = 60 * 1000;
const SECOND_MS: i64 = 1000;

/// Zero-padded time left until launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: String,
    pub hours: String,
    pub mins: String,
    pub secs: String,
}

impl TimeLeft {
    pub fn zero() -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            mins: "00".to_string(),
            secs: "00".to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for TimeLeft {
    fn default() -> Self {
        Self::zero()
    }
}

pub fn launch_target() -> Option<DateTime<Utc>> {
    let (y, mo, d, h, mi, s) = config::LAUNCH_TARGET;
    Kolkata
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .map(|t| t.with_timezone(&Utc))
}

/// Whole units left between `now` and `target`; never negative.
pub fn time_left(now: DateTime<Utc>, target: DateTime<Utc>) -> TimeLeft {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return TimeLeft::zero();
    }
    TimeLeft {
        days: format!("{:02}", diff / DAY_MS),
        hours: format!("{:02}", (diff % DAY_MS) / HOUR_MS),
        mins: format!("{:02}", (diff % HOUR_MS) / MINUTE_MS),
        secs: format!("{:02}", (diff % MINUTE_MS) / SECOND_MS),
    }
}

fn time_left_now() -> TimeLeft {
    match launch_target() {
        Some(target) => time_left(Utc::now(), target),
        None => TimeLeft::zero(),
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProviderProps {
    pub children: Children,
}

/// Owns the page's only countdown timer and shares each tick through context,
/// so every display shows the same value.
#[function_component(CountdownProvider)]
pub fn countdown_provider(props: &CountdownProviderProps) -> Html {
    let left = use_state(time_left_now);

    {
        let left = left.clone();
        use_interval(
            move || {
                left.set(time_left_now());
            },
            config::COUNTDOWN_TICK_MILLIS,
        );
    }

    html! {
        <ContextProvider<TimeLeft> context={(*left).clone()}>
            { for props.children.iter() }
        </ContextProvider<TimeLeft>>
    }
}

#[hook]
pub fn use_time_left() -> TimeLeft {
    use_context::<TimeLeft>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn target() -> DateTime<Utc> {
        launch_target().unwrap()
    }

    #[test]
    fn target_is_new_years_eve_in_india() {
        assert_eq!(target().to_rfc3339(), "2025-12-31T18:29:59+00:00");
    }

    #[test]
    fn splits_into_padded_units() {
        let now = target()
            - (Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4) + Duration::milliseconds(999));
        assert_eq!(
            time_left(now, target()),
            TimeLeft {
                days: "01".to_string(),
                hours: "02".to_string(),
                mins: "03".to_string(),
                secs: "04".to_string(),
            }
        );
    }

    #[test]
    fn days_are_not_truncated() {
        let now = target() - Duration::days(123);
        let left = time_left(now, target());
        assert_eq!(left.days, "123");
        assert_eq!(left.hours, "00");
    }

    #[test]
    fn sub_second_remainder_rounds_down() {
        let left = time_left(target() - Duration::milliseconds(999), target());
        assert_eq!(left, TimeLeft::zero());
        assert!(left.is_zero());
    }

    #[test]
    fn same_instant_same_output() {
        let now = target() - Duration::seconds(98_765);
        assert_eq!(time_left(now, target()), time_left(now, target()));
    }

    #[test]
    fn stays_at_zero_after_target() {
        for offset in [0, 1, 60_000, 86_400_000 * 400] {
            let now = target() + Duration::milliseconds(offset);
            assert_eq!(time_left(now, target()), TimeLeft::zero());
        }
    }
}
