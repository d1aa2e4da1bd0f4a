/// Asserts that the block panics, optionally with a payload containing `$expected`.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "block was expected to panic but returned normally"
        );
    };
    ($run:block, $expected:expr) => {
        let payload = std::panic::catch_unwind(|| $run)
            .expect_err("block was expected to panic but returned normally");
        let message = payload.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {:?} doesn't mention {:?}", message, $expected
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
