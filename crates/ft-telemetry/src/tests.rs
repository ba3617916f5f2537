//! Unit tests for ft-telemetry.

use ft_agent::{DeviceState, DeviceStateBuilder};
use ft_core::{DeviceKind, Mode, Position};

use crate::Payload;

fn device(kind: DeviceKind) -> DeviceState {
    DeviceStateBuilder::new(format!("{kind}-42"), kind, Position::new(-1.2921234, 36.8219876, 12.3456789))
        .heading(90.0)
        .speed_kmh(40.0)
        .build()
}

fn payload(kind: DeviceKind) -> Payload {
    Payload::snapshot(&device(kind), 1_700_000_000)
}

// ── Payload ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod payload_tests {
    use super::*;

    #[test]
    fn car_carries_gas_only() {
        let p = payload(DeviceKind::Car);
        assert_eq!(p.gas, Some(100.0));
        assert_eq!(p.battery, None);
        assert_eq!(p.resource_key(), "gas");
    }

    #[test]
    fn drone_and_phone_carry_battery() {
        for kind in [DeviceKind::Drone, DeviceKind::Phone] {
            let p = payload(kind);
            assert_eq!(p.gas, None);
            assert_eq!(p.battery, Some(100.0));
            assert_eq!(p.resource_key(), "battery");
        }
    }

    #[test]
    fn resource_rounded_to_one_decimal() {
        let mut s = device(DeviceKind::Phone);
        s.set_resource(57.26);
        let p = Payload::snapshot(&s, 0);
        assert_eq!(p.resource_level(), Some(57.3));
    }

    #[test]
    fn location_rounded_to_six_decimals() {
        let p = payload(DeviceKind::Drone);
        assert_eq!(p.location, Position::new(-1.292123, 36.821988, 12.345679));
    }

    #[test]
    fn json_shape() {
        let p = payload(DeviceKind::Car);
        let v: serde_json::Value = serde_json::to_value(&p).unwrap();
        assert_eq!(v["deviceId"], "car-42");
        assert_eq!(v["timestamp"], 1_700_000_000);
        assert_eq!(v["status"], "driving");
        assert_eq!(v["location"].as_array().unwrap().len(), 3);
        assert_eq!(v["gas"], 100.0);
        assert!(v.get("battery").is_none());
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let mut s = device(DeviceKind::Drone);
        s.mode = Mode::Descending;
        s.set_resource(18.44);
        let p = Payload::snapshot(&s, 123);
        let back: Payload = serde_json::from_slice(&serde_json::to_vec(&p).unwrap()).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.device_id.as_str(), "drone-42");
        assert_eq!(back.battery, Some(18.4));
        assert_eq!(back.status, Mode::Descending);
    }

    #[test]
    fn partition_key_is_device_id() {
        assert_eq!(payload(DeviceKind::Phone).partition_key(), "phone-42");
    }
}

// ── RetryPolicy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod retry_tests {
    use std::time::Duration;

    use crate::RetryPolicy;

    #[test]
    fn defaults() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_attempts, 5);
        assert_eq!(p.min_delay(), Duration::from_millis(200));
        assert_eq!(p.max_delay(), Duration::from_secs(5));
    }

    #[test]
    fn no_delay_before_first_attempt() {
        assert_eq!(RetryPolicy::default().delay_before(1), Duration::ZERO);
        assert_eq!(RetryPolicy::default().delay_before(0), Duration::ZERO);
    }

    #[test]
    fn delay_doubles_then_caps() {
        let p = RetryPolicy::default();
        let ms: Vec<u128> = (2..=8).map(|n| p.delay_before(n).as_millis()).collect();
        assert_eq!(ms, [200, 400, 800, 1600, 3200, 5000, 5000]);
    }

    #[test]
    fn huge_attempt_does_not_overflow() {
        assert_eq!(RetryPolicy::default().delay_before(u32::MAX), Duration::from_secs(5));
    }

    #[test]
    fn immediate_never_sleeps() {
        let p = RetryPolicy::immediate(3);
        assert!((1..=3).all(|n| p.delay_before(n).is_zero()));
    }

    #[test]
    fn zero_attempts_means_one() {
        assert_eq!(RetryPolicy::immediate(0).attempts(), 1);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: RetryPolicy = serde_json::from_str(r#"{"max_attempts":2}"#).unwrap();
        assert_eq!(p.max_attempts, 2);
        assert_eq!(p.min_delay_ms, 200);
    }
}

// ── TelemetryEmitter ──────────────────────────────────────────────────────────

#[cfg(test)]
mod emitter_tests {
    use std::sync::Arc;

    use super::*;
    use crate::{EmitOutcome, EmitStats, MemorySink, RetryPolicy, TelemetryEmitter};

    #[tokio::test]
    async fn delivers_first_try() {
        let emitter = TelemetryEmitter::new(MemorySink::new(), "nairobi-stream");
        let out = emitter.emit(&payload(DeviceKind::Car)).await.unwrap();
        assert_eq!(out, EmitOutcome::Delivered { attempts: 1 });

        let records = emitter.sink().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stream, "nairobi-stream");
        assert_eq!(records[0].partition_key, "car-42");
        let back: Payload = serde_json::from_slice(&records[0].data).unwrap();
        assert_eq!(back, payload(DeviceKind::Car));
    }

    #[tokio::test]
    async fn permanent_failure_tries_exactly_max_attempts() {
        let emitter = TelemetryEmitter::new(MemorySink::always_failing(), "s")
            .with_policy(RetryPolicy::immediate(4));
        let out = emitter.emit(&payload(DeviceKind::Phone)).await.unwrap();
        assert_eq!(out, EmitOutcome::Dropped { attempts: 4 });
        assert_eq!(emitter.sink().attempts(), 4);
        assert!(emitter.sink().is_empty());

        let stats = emitter.stats().snapshot();
        assert_eq!((stats.delivered, stats.dropped, stats.retries), (0, 1, 3));
    }

    #[tokio::test]
    async fn transient_failure_recovers() {
        let emitter = TelemetryEmitter::new(MemorySink::new().fail_next(2), "s")
            .with_policy(RetryPolicy::immediate(5));
        let out = emitter.emit(&payload(DeviceKind::Drone)).await.unwrap();
        assert_eq!(out, EmitOutcome::Delivered { attempts: 3 });
        assert_eq!(emitter.sink().attempts(), 3);
        assert_eq!(emitter.sink().len(), 1);
    }

    #[tokio::test]
    async fn dropped_sample_does_not_block_next() {
        let emitter = TelemetryEmitter::new(MemorySink::new().fail_next(2), "s")
            .with_policy(RetryPolicy::immediate(2));
        assert!(!emitter.emit(&payload(DeviceKind::Car)).await.unwrap().is_delivered());
        assert!(emitter.emit(&payload(DeviceKind::Car)).await.unwrap().is_delivered());
    }

    #[tokio::test]
    async fn shared_stats_aggregate() {
        let stats = Arc::new(EmitStats::new());
        let sink = Arc::new(MemorySink::new());
        let a = TelemetryEmitter::new(Arc::clone(&sink), "s").with_stats(Arc::clone(&stats));
        let b = TelemetryEmitter::new(Arc::clone(&sink), "s").with_stats(Arc::clone(&stats));
        a.emit(&payload(DeviceKind::Car)).await.unwrap();
        b.emit(&payload(DeviceKind::Phone)).await.unwrap();
        assert_eq!(stats.snapshot().delivered, 2);
        assert_eq!(sink.len(), 2);
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::{AnySink, CsvSink, HttpSink, LogSink, TelemetryEmitter, TelemetrySink};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("telemetry.csv");
        let _sink = CsvSink::create(&path).unwrap();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["device_id", "timestamp", "status", "lat", "lon", "alt", "resource_key", "resource"]
        );
    }

    #[tokio::test]
    async fn csv_rows_via_emitter() {
        let dir = tmp();
        let path = dir.path().join("telemetry.csv");
        let emitter = TelemetryEmitter::new(CsvSink::create(&path).unwrap(), "s");
        emitter.emit(&payload(DeviceKind::Car)).await.unwrap();
        emitter.emit(&payload(DeviceKind::Drone)).await.unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "car-42");
        assert_eq!(&rows[0][2], "driving");
        assert_eq!(&rows[0][6], "gas");
        assert_eq!(&rows[1][6], "battery");
        assert_eq!(rows[1][5].parse::<f64>().unwrap(), 12.345679);
    }

    #[tokio::test]
    async fn csv_rejects_non_payload_bytes() {
        let dir = tmp();
        let sink = CsvSink::create(&dir.path().join("t.csv")).unwrap();
        assert!(sink.put_record("s", "k", b"not json").await.is_err());
    }

    #[tokio::test]
    async fn log_sink_always_succeeds() {
        assert!(LogSink.put_record("s", "car-1", b"{}").await.is_ok());
    }

    #[test]
    fn http_url_layout() {
        let sink = HttpSink::new("http://localhost:4566/", Duration::from_secs(1)).unwrap();
        assert_eq!(sink.records_url("nairobi-stream"), "http://localhost:4566/streams/nairobi-stream/records");
    }

    #[tokio::test]
    async fn http_unreachable_is_dropped_not_raised() {
        // Port 9 (discard) on loopback is closed in test environments.
        let sink = HttpSink::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let emitter = TelemetryEmitter::new(sink, "s").with_policy(crate::RetryPolicy::immediate(2));
        let out = emitter.emit(&payload(DeviceKind::Car)).await.unwrap();
        assert_eq!(out.attempts(), 2);
        assert!(!out.is_delivered());
    }

    #[tokio::test]
    async fn any_sink_delegates() {
        let dir = tmp();
        let path = dir.path().join("t.csv");
        let sink = AnySink::from(CsvSink::create(&path).unwrap());
        let data = serde_json::to_vec(&payload(DeviceKind::Car)).unwrap();
        sink.put_record("s", "car-42", &data).await.unwrap();
        assert_eq!(csv::Reader::from_path(&path).unwrap().records().count(), 1);
        assert!(AnySink::from(LogSink).put_record("s", "k", b"{}").await.is_ok());
    }
}
