use crate::domain::models::MoodPoint;

/// Aggregates shown at the top of the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub average: f32,
    pub best: MoodPoint,
    /// Percent change of the later half of the series against the earlier
    /// half. Display-only, like every other number here.
    pub trend_percent: f32,
}

pub fn summarize(points: &[MoodPoint]) -> Option<MoodSummary> {
    if points.is_empty() {
        return None;
    }

    let average = points.iter().map(|p| p.mood).sum::<f32>() / points.len() as f32;

    let best = points
        .iter()
        .cloned()
        .reduce(|a, b| if b.mood > a.mood { b } else { a })?;

    let mid = points.len() / 2;
    let trend_percent = if mid == 0 {
        0.0
    } else {
        let earlier = points[..mid].iter().map(|p| p.mood).sum::<f32>() / mid as f32;
        let later =
            points[mid..].iter().map(|p| p.mood).sum::<f32>() / (points.len() - mid) as f32;
        if earlier == 0.0 {
            0.0
        } else {
            (later - earlier) / earlier * 100.0
        }
    };

    Some(MoodSummary {
        average,
        best,
        trend_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, mood: f32) -> MoodPoint {
        MoodPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            mood,
        }
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn single_point_is_its_own_average_and_best() {
        let summary = summarize(&[point(8, 6.0)]).unwrap();
        assert_eq!(summary.average, 6.0);
        assert_eq!(summary.best.mood, 6.0);
        assert_eq!(summary.trend_percent, 0.0);
    }

    #[test]
    fn improving_week_shows_positive_trend() {
        let series = vec![
            point(8, 6.0),
            point(9, 7.0),
            point(10, 6.5),
            point(11, 8.0),
            point(12, 7.5),
            point(13, 8.5),
            point(14, 9.0),
            point(15, 8.0),
        ];
        let summary = summarize(&series).unwrap();
        assert!((summary.average - 7.5625).abs() < 0.001);
        assert_eq!(summary.best.mood, 9.0);
        assert_eq!(summary.best.date, NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        assert!(summary.trend_percent > 0.0);
    }

    #[test]
    fn flat_series_has_zero_trend() {
        let series = vec![point(1, 5.0), point(2, 5.0), point(3, 5.0), point(4, 5.0)];
        let summary = summarize(&series).unwrap();
        assert_eq!(summary.trend_percent, 0.0);
    }
}
