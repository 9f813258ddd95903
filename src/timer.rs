//! Awaitable browser timers.

use std::time::Duration;

use js_sys::Promise;
use log::warn;
use wasm_bindgen_futures::JsFuture;

/// Suspend the current task for `duration` using `window.setTimeout`.
///
/// A zero duration resolves immediately without touching any browser API, so
/// code paths configured with no delay also run on the host.
pub async fn sleep(duration: Duration) {
	if duration.is_zero() {
		return;
	}

	let millis = duration.as_millis().min(i32::MAX as u128) as i32;
	let promise = Promise::new(&mut |resolve, _reject| {
		let Some(window) = web_sys::window() else {
			warn!("portfolio: no window available for timer, resolving immediately");
			let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
			return;
		};
		if window
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
			.is_err()
		{
			let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
		}
	});

	let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_sleep_completes_without_browser() {
		futures::executor::block_on(sleep(Duration::ZERO));
	}
}
