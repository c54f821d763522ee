/// Asserts that the block panics. The block may borrow its surroundings mutably, unwind safety is
/// asserted rather than checked, so don't reuse anything the block touched after a caught panic
/// unless it is known to be consistent.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
