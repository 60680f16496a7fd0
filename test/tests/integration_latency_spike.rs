/// INTEGRATION TESTS: jittery delivery
///
/// Latency spikes are absorbed within one update, dips revert slowly, and
/// duplicate or reordered packets never disturb the trajectory.

use reckon_shared::{Extrapolator, ScalarExtrapolator};
use reckon_test::{assert_position_close, SampleStream};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn steady() -> ScalarExtrapolator<f64> {
    let mut extrapolator = ScalarExtrapolator::<f64>::new();
    extrapolator.reset(0.0, 0.0625, [0.0]);
    assert!(extrapolator.add_sample(0.125, 0.1875, [0.0]));
    assert_eq!(extrapolator.estimated_latency(), 0.0625);
    extrapolator
}

#[test]
fn spike_moves_latency_exactly_halfway() {
    init_logger();
    let mut extrapolator = steady();

    assert!(extrapolator.add_sample(0.25, 0.8125, [0.0]));

    assert_eq!(extrapolator.estimated_latency(), 0.3125);
}

#[test]
fn recovery_after_spike_is_slow() {
    init_logger();
    let mut extrapolator = steady();
    extrapolator.add_sample(0.25, 0.8125, [0.0]);

    assert!(extrapolator.add_sample(0.875, 0.9375, [0.0]));

    assert_eq!(extrapolator.estimated_latency(), 0.28125);
}

#[test]
fn dip_moves_latency_an_eighth() {
    init_logger();
    let mut extrapolator = steady();

    assert!(extrapolator.add_sample(0.25, 0.25, [0.0]));
    assert_eq!(extrapolator.estimated_latency(), 0.0546875);

    // back to normal, which is a rise again
    assert!(extrapolator.add_sample(0.375, 0.4375, [0.0]));
    assert_eq!(extrapolator.estimated_latency(), 0.05859375);
}

#[test]
fn lost_packet_raises_update_interval_fast() {
    init_logger();
    let mut extrapolator = ScalarExtrapolator::<f64>::new();
    extrapolator.reset(0.0, 0.125, [0.0]);
    assert!(extrapolator.add_sample(0.125, 0.25, [0.0]));
    assert_eq!(extrapolator.estimated_update_interval(), 0.125);

    // the packet sent at 0.25 never arrives
    assert!(extrapolator.add_sample(0.375, 0.5, [0.0]));

    assert_eq!(extrapolator.estimated_update_interval(), 0.1875);
}

#[test]
fn duplicates_and_reordering_do_not_disturb_trajectory() {
    init_logger();
    let samples: Vec<_> = SampleStream::new([0.0, 0.0], [1.0, 1.0], 0.1, 0.04)
        .with_jitter(vec![0.0, 0.01, -0.01, 0.02])
        .take(30)
        .collect();

    let mut clean = Extrapolator::<2, f64>::new();
    let mut noisy = Extrapolator::<2, f64>::new();

    for (index, sample) in samples.iter().enumerate() {
        assert!(clean.add_sample(sample.packet_time, sample.local_time, sample.position));
        assert!(noisy.add_sample(sample.packet_time, sample.local_time, sample.position));

        // a duplicate of this packet and a late copy of an older one
        assert!(!noisy.add_sample(sample.packet_time, sample.local_time + 0.001, sample.position));
        if index > 0 {
            let older = samples[index - 1];
            assert!(!noisy.add_sample(older.packet_time, sample.local_time + 0.002, older.position));
        }

        assert_eq!(noisy, clean);
    }

    let last = samples[samples.len() - 1];
    assert_position_close(
        noisy.predict(last.local_time).position,
        clean.predict(last.local_time).position,
        0.0,
    );
}
