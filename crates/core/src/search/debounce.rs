use std::time::{Duration, Instant};

/// Collapses a burst of input changes into a single deferred trigger.
///
/// Every change re-arms a single deadline `delay` in the future; the trigger
/// fires once the deadline passes with no further change. Re-arming cancels
/// the pending trigger entirely, so at most one fire happens per burst.
#[derive(Debug)]
pub struct Debouncer {
	delay: Duration,
	deadline: Option<Instant>,
}

impl Debouncer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			deadline: None,
		}
	}

	/// Record an input change, (re)arming the deadline.
	pub fn note_change(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	/// Drop any pending trigger without firing it.
	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	/// Whether a trigger is waiting on the quiet period.
	#[must_use]
	pub fn is_armed(&self) -> bool {
		self.deadline.is_some()
	}

	/// Consume the deadline if it has elapsed. Returns `true` at most once
	/// per armed burst.
	pub fn fire_if_elapsed(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(300);

	#[test]
	fn does_not_fire_before_the_quiet_period() {
		let mut debounce = Debouncer::new(DELAY);
		let base = Instant::now();
		debounce.note_change(base);
		assert!(!debounce.fire_if_elapsed(base + Duration::from_millis(299)));
		assert!(debounce.is_armed());
	}

	#[test]
	fn fires_exactly_once_after_the_quiet_period() {
		let mut debounce = Debouncer::new(DELAY);
		let base = Instant::now();
		debounce.note_change(base);
		assert!(debounce.fire_if_elapsed(base + DELAY));
		assert!(!debounce.is_armed());
		assert!(!debounce.fire_if_elapsed(base + DELAY * 2));
	}

	#[test]
	fn a_further_change_resets_the_deadline() {
		let mut debounce = Debouncer::new(DELAY);
		let base = Instant::now();
		debounce.note_change(base);
		debounce.note_change(base + Duration::from_millis(200));
		// The original deadline has passed, but the burst continued.
		assert!(!debounce.fire_if_elapsed(base + Duration::from_millis(400)));
		assert!(debounce.fire_if_elapsed(base + Duration::from_millis(500)));
	}

	#[test]
	fn cancel_discards_the_pending_trigger() {
		let mut debounce = Debouncer::new(DELAY);
		let base = Instant::now();
		debounce.note_change(base);
		debounce.cancel();
		assert!(!debounce.is_armed());
		assert!(!debounce.fire_if_elapsed(base + DELAY));
	}
}
