use std::{array, ops::RangeInclusive};

use log::{debug, trace, warn};

use crate::{ExtrapolatorConfig, ExtrapolatorError, Prediction, Real, RunningEstimate};

/// Extrapolator with a single axis, for scalar quantities.
pub type ScalarExtrapolator<T = f32> = Extrapolator<1, T>;

/// Tracks one `N`-dimensional quantity of one remote entity and generates
/// smooth guesses about where it is between updates.
///
/// Each accepted sample starts a new linear segment. The segment begins where
/// the previous one placed the entity at the moment the sample was processed
/// (the snap point), and heads for where the sample says the entity will be
/// after one more expected update interval (the aim point). This gives a
/// jump-free trajectory that corrects itself on every packet.
///
/// Queries are valid from the snap time up to one update interval past the
/// aim time. Beyond that the entity is assumed to have stopped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::component::Component))]
pub struct Extrapolator<const N: usize, T: Real = f32> {
    config: ExtrapolatorConfig,
    initialized: bool,
    snap_position: [T; N],
    snap_velocity: [T; N],
    snap_time: f64,
    aim_position: [T; N],
    aim_time: f64,
    last_packet_position: [T; N],
    last_packet_time: f64,
    latency: RunningEstimate,
    update_interval: RunningEstimate,
}

impl<const N: usize, T: Real> Extrapolator<N, T> {
    pub const DIMENSION: usize = N;

    pub fn new() -> Self {
        Self::with_config(ExtrapolatorConfig::default())
    }

    pub fn with_config(config: ExtrapolatorConfig) -> Self {
        let zero = [T::ZERO; N];
        Self {
            latency: RunningEstimate::new(&config.latency),
            update_interval: RunningEstimate::new(&config.update_interval),
            config,
            initialized: false,
            snap_position: zero,
            snap_velocity: zero,
            snap_time: 0.0,
            aim_position: zero,
            aim_time: 0.0,
            last_packet_position: zero,
            // No packet yet, so any finite packet time is newer
            last_packet_time: f64::NEG_INFINITY,
        }
    }

    pub fn config(&self) -> &ExtrapolatorConfig {
        &self.config
    }

    /// Returns true once a sample has been accepted or the extrapolator has
    /// been reset.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Running estimate of the time between a packet being sent and it being
    /// processed locally.
    pub fn estimated_latency(&self) -> f64 {
        self.latency.value()
    }

    /// Running estimate of the time between successive packets.
    pub fn estimated_update_interval(&self) -> f64 {
        self.update_interval.value()
    }

    /// Packet time of the last accepted sample, if any.
    pub fn last_packet_time(&self) -> Option<f64> {
        self.initialized.then_some(self.last_packet_time)
    }

    /// Window of times a query is answered without clamping.
    pub fn valid_range(&self) -> RangeInclusive<f64> {
        self.snap_time..=(self.aim_time + self.update_interval.value())
    }

    /// Feeds a position sample, deriving the velocity from the previous
    /// accepted sample.
    ///
    /// Returns `false` (and changes nothing) if `packet_time` is not strictly
    /// greater than the last accepted packet time.
    pub fn add_sample(&mut self, packet_time: f64, local_time: f64, position: [T; N]) -> bool {
        self.try_add_sample(packet_time, local_time, position, None)
            .is_ok()
    }

    /// Feeds a position sample along with the entity's velocity at
    /// `packet_time`, which improves the guess over a derived velocity.
    pub fn add_sample_with_velocity(
        &mut self,
        packet_time: f64,
        local_time: f64,
        position: [T; N],
        velocity: [T; N],
    ) -> bool {
        self.try_add_sample(packet_time, local_time, position, Some(velocity))
            .is_ok()
    }

    /// Feeds a sample valid at `packet_time` (sender clock) that is being
    /// processed at `local_time` (i.e. "now").
    ///
    /// # Errors
    /// - `ExtrapolatorError::StaleSample` for a duplicate or out-of-order sample
    /// - `ExtrapolatorError::NonFiniteTime` if either time is NaN or infinite
    /// - `ExtrapolatorError::TimeSpanOverflow` if the times are finite but so
    ///   far apart that the derived spans are not
    ///
    /// The extrapolator is untouched when an error is returned.
    pub fn try_add_sample(
        &mut self,
        packet_time: f64,
        local_time: f64,
        position: [T; N],
        velocity: Option<[T; N]>,
    ) -> Result<(), ExtrapolatorError> {
        if !packet_time.is_finite() || !local_time.is_finite() {
            warn!(
                "Rejecting sample with non-finite time (packet {}, local {})",
                packet_time, local_time
            );
            return Err(ExtrapolatorError::NonFiniteTime {
                packet_time,
                local_time,
            });
        }

        if packet_time <= self.last_packet_time {
            debug!(
                "Discarding stale sample: packet time {} is not newer than {}",
                packet_time, self.last_packet_time
            );
            return Err(ExtrapolatorError::StaleSample {
                packet_time,
                last_packet_time: self.last_packet_time,
            });
        }

        if local_time < packet_time {
            warn!(
                "Sample processed at {} claims to be sent at {}. Is the clock synchronized?",
                local_time, packet_time
            );
        }

        if !self.initialized {
            Self::check_seed_spans(packet_time, local_time)?;
            self.seed(
                packet_time,
                local_time,
                position,
                velocity.unwrap_or([T::ZERO; N]),
            );
            return Ok(());
        }

        let mut latency = self.latency.clone();
        latency.observe(local_time - packet_time);
        let mut update_interval = self.update_interval.clone();
        update_interval.observe(packet_time - self.last_packet_time);

        let horizon = local_time + update_interval.value() * 2.0;
        if !update_interval.value().is_finite()
            || !latency.value().is_finite()
            || !horizon.is_finite()
            || !(horizon - packet_time).is_finite()
        {
            warn!(
                "Rejecting sample whose time spans overflow (packet {}, local {}, last packet {})",
                packet_time, local_time, self.last_packet_time
            );
            return Err(ExtrapolatorError::TimeSpanOverflow {
                packet_time,
                local_time,
            });
        }

        let velocity = velocity.unwrap_or_else(|| self.derive_velocity(packet_time, &position));

        self.latency = latency;
        self.update_interval = update_interval;

        self.last_packet_position = position;
        self.last_packet_time = packet_time;

        // still the previous segment, clamped against the updated interval
        self.snap_position = self.predict(local_time).position;
        self.snap_time = local_time;

        self.aim_time = local_time + self.update_interval.value();
        let lead = self.aim_time - packet_time;
        self.aim_position =
            array::from_fn(|i| T::from_f64(position[i].to_f64() + velocity[i].to_f64() * lead));

        let span = self.aim_time - self.snap_time;
        if span.abs() < self.config.time_epsilon {
            self.snap_velocity = velocity;
        } else {
            self.snap_velocity = array::from_fn(|i| {
                T::from_f64((self.aim_position[i].to_f64() - self.snap_position[i].to_f64()) / span)
            });
        }

        trace!(
            "New segment from {:?} at {} toward {:?} at {}",
            self.snap_position,
            self.snap_time,
            self.aim_position,
            self.aim_time
        );

        Ok(())
    }

    /// Re-sets the extrapolator's idea of time and position, with zero velocity.
    ///
    /// `packet_time` must not be later than `local_time`. This is only checked
    /// in debug builds; see [`Extrapolator::try_reset`] for a checked version.
    pub fn reset(&mut self, packet_time: f64, local_time: f64, position: [T; N]) {
        self.reset_with_velocity(packet_time, local_time, position, [T::ZERO; N]);
    }

    /// Re-sets the extrapolator's idea of time, position and velocity. The
    /// staleness check is bypassed, so this also rewinds time.
    pub fn reset_with_velocity(
        &mut self,
        packet_time: f64,
        local_time: f64,
        position: [T; N],
        velocity: [T; N],
    ) {
        debug_assert!(
            packet_time <= local_time,
            "reset packet time {} is later than local time {}",
            packet_time,
            local_time
        );
        self.seed(packet_time, local_time, position, velocity);
    }

    /// Checked version of [`Extrapolator::reset_with_velocity`]. A missing
    /// velocity resets to zero.
    ///
    /// # Errors
    /// - `ExtrapolatorError::NonFiniteTime` if either time is NaN or infinite
    /// - `ExtrapolatorError::PacketAfterLocalTime` if `packet_time > local_time`
    /// - `ExtrapolatorError::TimeSpanOverflow` if `local_time - packet_time`
    ///   overflows
    pub fn try_reset(
        &mut self,
        packet_time: f64,
        local_time: f64,
        position: [T; N],
        velocity: Option<[T; N]>,
    ) -> Result<(), ExtrapolatorError> {
        if !packet_time.is_finite() || !local_time.is_finite() {
            return Err(ExtrapolatorError::NonFiniteTime {
                packet_time,
                local_time,
            });
        }
        if packet_time > local_time {
            return Err(ExtrapolatorError::PacketAfterLocalTime {
                packet_time,
                local_time,
            });
        }
        Self::check_seed_spans(packet_time, local_time)?;

        self.seed(
            packet_time,
            local_time,
            position,
            velocity.unwrap_or([T::ZERO; N]),
        );
        Ok(())
    }

    /// Estimates position and velocity at `for_time`, which should lie in
    /// [`Extrapolator::valid_range`].
    ///
    /// Times outside the window are clamped to it: the position still makes
    /// sense, but the velocity is zeroed and `in_range` is false.
    pub fn predict(&self, for_time: f64) -> Prediction<N, T> {
        if !self.initialized {
            return Prediction::out_of_range([T::ZERO; N]);
        }

        let horizon = self.aim_time + self.update_interval.value();
        let mut time = for_time;
        let mut in_range = true;

        if time.is_nan() || time < self.snap_time {
            time = self.snap_time;
            in_range = false;
        }
        if time > horizon {
            time = horizon;
            in_range = false;
        }

        let elapsed = time - self.snap_time;
        let position = array::from_fn(|i| {
            T::from_f64(self.snap_position[i].to_f64() + self.snap_velocity[i].to_f64() * elapsed)
        });

        if in_range {
            Prediction {
                position,
                velocity: self.snap_velocity,
                in_range,
            }
        } else {
            Prediction::out_of_range(position)
        }
    }

    /// Position-only form of [`Extrapolator::predict`].
    pub fn read_position(&self, for_time: f64) -> ([T; N], bool) {
        let prediction = self.predict(for_time);
        (prediction.position, prediction.in_range)
    }

    fn check_seed_spans(packet_time: f64, local_time: f64) -> Result<(), ExtrapolatorError> {
        let interval = (local_time - packet_time).max(0.0);
        if interval.is_finite() && (local_time + interval * 2.0).is_finite() {
            return Ok(());
        }
        warn!(
            "Rejecting seed whose time spans overflow (packet {}, local {})",
            packet_time, local_time
        );
        Err(ExtrapolatorError::TimeSpanOverflow {
            packet_time,
            local_time,
        })
    }

    fn derive_velocity(&self, packet_time: f64, position: &[T; N]) -> [T; N] {
        let elapsed = packet_time - self.last_packet_time;
        if elapsed.abs() <= self.config.time_epsilon {
            return [T::ZERO; N];
        }

        array::from_fn(|i| {
            T::from_f64((position[i].to_f64() - self.last_packet_position[i].to_f64()) / elapsed)
        })
    }

    fn seed(&mut self, packet_time: f64, local_time: f64, position: [T; N], velocity: [T; N]) {
        let interval = (local_time - packet_time).max(0.0);

        self.last_packet_time = packet_time;
        self.last_packet_position = position;
        self.snap_time = local_time;
        self.snap_position = position;
        self.latency.seed(interval);
        self.update_interval.seed(interval);
        self.aim_time = local_time + interval;
        self.snap_velocity = velocity;
        self.aim_position =
            array::from_fn(|i| T::from_f64(position[i].to_f64() + velocity[i].to_f64() * interval));
        self.initialized = true;

        trace!("Seeded at {:?} (packet {}, local {})", position, packet_time, local_time);
    }
}

impl<const N: usize, T: Real> Default for Extrapolator<N, T> {
    fn default() -> Self {
        Self::new()
    }
}
