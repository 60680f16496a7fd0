use thiserror::Error;

/// Errors that can occur when feeding samples to an Extrapolator
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExtrapolatorError {
    /// Sample is a duplicate or arrived out of order
    #[error("Stale sample with packet time {packet_time} is not newer than the last accepted packet time {last_packet_time}. Duplicate and out-of-order samples are discarded")]
    StaleSample {
        packet_time: f64,
        last_packet_time: f64,
    },

    /// A supplied time is NaN or infinite
    #[error("Non-finite time supplied (packet time {packet_time}, local time {local_time}). Times must be finite readings of the synchronized clock")]
    NonFiniteTime {
        packet_time: f64,
        local_time: f64,
    },

    /// Reset was asked to process a packet before it was sent
    #[error("Reset packet time {packet_time} is later than local time {local_time}. A packet cannot be processed before it was sent")]
    PacketAfterLocalTime {
        packet_time: f64,
        local_time: f64,
    },

    /// Times are finite but the spans derived from them are not
    #[error("Time spans derived from packet time {packet_time} and local time {local_time} overflow. Samples this far apart cannot be extrapolated")]
    TimeSpanOverflow {
        packet_time: f64,
        local_time: f64,
    },
}
