//! A logger that panics on every record must not unwind through the exports.

use dota_botscript::ffi::{Act, Init, Observe, Shutdown};
use log::{LevelFilter, Log, Metadata, Record};
use std::{
	ptr,
	sync::atomic::{AtomicUsize, Ordering},
};

static RECORDS: AtomicUsize = AtomicUsize::new(0);

struct Panicking;
impl Log for Panicking {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}
	fn log(&self, _: &Record) {
		RECORDS.fetch_add(1, Ordering::SeqCst);
		panic!("logger is broken");
	}
	fn flush(&self) {}
}

static LOGGER: Panicking = Panicking;

#[test]
fn exports_survive_a_panicking_logger() {
	log::set_logger(&LOGGER).unwrap();
	log::set_max_level(LevelFilter::Info);

	let garbage = [0xffu8, 0xff, 0xff];
	Init(2, ptr::null_mut(), ptr::null_mut());
	unsafe {
		Observe(2, ptr::null(), 0);
		Observe(2, garbage.as_ptr(), garbage.len());
		assert!(Act(2, ptr::null(), 0).is_null());
	}
	Shutdown();

	// Each export's first record panicked, then its panic report panicked too.
	assert_eq!(RECORDS.load(Ordering::SeqCst), 10);
}
