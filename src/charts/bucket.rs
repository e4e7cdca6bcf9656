use chrono::{NaiveDateTime, Timelike};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::ChartPoint;

/// Timestamp layout of the service's fine-grained series, e.g. `2024-01-01-10:05`.
pub const RAW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M";
/// Layout of bucket keys, e.g. `2024-01-01 10:00`.
pub const BUCKET_KEY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Default)]
struct Accumulator {
    baseline_sum: f64,
    optimized_sum: f64,
    count: u32,
}

/// Downsamples a series into `interval_minutes`-wide buckets, averaging the
/// samples whose minute floors into the same bucket.
///
/// Buckets come out in the order their key is first seen, so the input must
/// already be time-sorted for a chronological result. Samples whose timestamp
/// does not parse are skipped. A zero width is treated as one minute.
pub fn bucket_chart_data(raw: &[ChartPoint], interval_minutes: u32) -> Vec<ChartPoint> {
    let width = interval_minutes.max(1);
    let mut order: Vec<(String, Accumulator)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for point in raw {
        let Some(key) = bucket_key(&point.timestamp, width) else {
            debug!(timestamp = %point.timestamp, "skipping sample with unparseable timestamp");
            continue;
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            order.push((key, Accumulator::default()));
            order.len() - 1
        });
        let acc = &mut order[slot].1;
        acc.baseline_sum += point.baseline;
        acc.optimized_sum += point.optimized;
        acc.count += 1;
    }

    order
        .into_iter()
        .map(|(key, acc)| ChartPoint {
            timestamp: key,
            baseline: acc.baseline_sum / f64::from(acc.count),
            optimized: acc.optimized_sum / f64::from(acc.count),
        })
        .collect()
}

fn bucket_key(timestamp: &str, width: u32) -> Option<String> {
    let parsed = NaiveDateTime::parse_from_str(timestamp.trim(), RAW_TIMESTAMP_FORMAT).ok()?;
    let floored = parsed.with_minute((parsed.minute() / width) * width)?;
    Some(floored.format(BUCKET_KEY_FORMAT).to_string())
}
