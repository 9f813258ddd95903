//! Typewriter text animation.
//!
//! Types the current text one character at a time, holds the full text, deletes
//! it again and moves on to the next text, wrapping at the end of the list.

use std::time::Duration;

/// Timing for one typewriter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingSpeed {
	/// Delay between typed characters.
	pub type_delay: Duration,
	/// Delay between deleted characters.
	pub delete_delay: Duration,
	/// Hold time once a text is fully typed.
	pub pause: Duration,
}

impl TypingSpeed {
	/// Build from millisecond delays.
	pub const fn from_millis(type_ms: u64, delete_ms: u64, pause_ms: u64) -> Self {
		Self {
			type_delay: Duration::from_millis(type_ms),
			delete_delay: Duration::from_millis(delete_ms),
			pause: Duration::from_millis(pause_ms),
		}
	}
}

impl Default for TypingSpeed {
	fn default() -> Self {
		Self::from_millis(100, 50, 2000)
	}
}

/// Cursor blink period.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Typewriter state over a fixed list of texts.
#[derive(Clone, Debug)]
pub struct Typewriter {
	texts: Vec<Vec<char>>,
	index: usize,
	shown: usize,
	deleting: bool,
	speed: TypingSpeed,
}

impl Typewriter {
	/// Typewriter over `texts`, starting empty on the first one.
	pub fn new(texts: &[String], speed: TypingSpeed) -> Self {
		Self {
			texts: texts.iter().map(|t| t.chars().collect()).collect(),
			index: 0,
			shown: 0,
			deleting: false,
			speed,
		}
	}

	fn current(&self) -> &[char] {
		self.texts.get(self.index).map(Vec::as_slice).unwrap_or_default()
	}

	/// The visible prefix of the current text.
	pub fn visible(&self) -> String {
		self.current()[..self.shown].iter().collect()
	}

	/// Whether the current text is being erased.
	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advance by one character and return how long to wait before the next call.
	pub fn advance(&mut self) -> Duration {
		if self.texts.is_empty() {
			return self.speed.pause;
		}

		let len = self.current().len();
		if !self.deleting {
			if self.shown < len {
				self.shown += 1;
				if self.shown == len {
					self.deleting = true;
					return self.speed.pause;
				}
				return self.speed.type_delay;
			}
			self.deleting = true;
			return self.speed.pause;
		}

		if self.shown > 0 {
			self.shown -= 1;
			return self.speed.delete_delay;
		}

		self.deleting = false;
		self.index = (self.index + 1) % self.texts.len();
		self.speed.type_delay
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn types_pauses_deletes_and_moves_on() {
		let speed = TypingSpeed::from_millis(150, 100, 3000);
		let mut tw = Typewriter::new(&texts(&["ab", "xyz"]), speed);
		assert_eq!(tw.visible(), "");

		assert_eq!(tw.advance(), speed.type_delay);
		assert_eq!(tw.visible(), "a");
		assert_eq!(tw.advance(), speed.pause);
		assert_eq!(tw.visible(), "ab");
		assert!(tw.is_deleting());

		assert_eq!(tw.advance(), speed.delete_delay);
		assert_eq!(tw.visible(), "a");
		assert_eq!(tw.advance(), speed.delete_delay);
		assert_eq!(tw.visible(), "");

		assert_eq!(tw.advance(), speed.type_delay);
		assert!(!tw.is_deleting());
		tw.advance();
		assert_eq!(tw.visible(), "x");
	}

	#[test]
	fn wraps_back_to_first_text() {
		let mut tw = Typewriter::new(&texts(&["a", "b"]), TypingSpeed::default());
		let mut seen = Vec::new();
		for _ in 0..12 {
			tw.advance();
			if !tw.visible().is_empty() {
				seen.push(tw.visible());
			}
		}
		seen.dedup();
		assert_eq!(seen, vec!["a", "b", "a", "b"]);
	}

	#[test]
	fn handles_multibyte_text() {
		let mut tw = Typewriter::new(&texts(&["é→"]), TypingSpeed::default());
		tw.advance();
		assert_eq!(tw.visible(), "é");
		tw.advance();
		assert_eq!(tw.visible(), "é→");
	}

	#[test]
	fn empty_list_idles() {
		let mut tw = Typewriter::new(&[], TypingSpeed::default());
		assert_eq!(tw.advance(), TypingSpeed::default().pause);
		assert_eq!(tw.visible(), "");
	}
}
