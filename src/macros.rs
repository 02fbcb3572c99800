/// Shorthand for creating a fixed point number in tests.
///
/// Exact with one argument, in the format `Qm.n` with three.
#[macro_export]
macro_rules! FP {
    ($value:expr) => {
        $crate::FixedPoint::new($value).unwrap()
    };
    ($value:expr, $integer_bits:expr, $fraction_bits:expr) => {
        $crate::FixedPoint::with_qformat($value, &$crate::QFormat::new($integer_bits, $fraction_bits)).unwrap()
    };
}

/// Shorthand for creating a format in tests.
#[macro_export]
macro_rules! Q {
    ($integer_bits:expr, $fraction_bits:expr) => {
        $crate::QFormat::new($integer_bits, $fraction_bits)
    };
}
