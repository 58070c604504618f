/// Declares a [`CountryRecord`](crate::catalog::CountryRecord) in the
/// compiled-in table. Arguments follow the field order of the record:
/// code, name, dial code, flag, format, placeholder, max length.
macro_rules! country {
    ($code:literal, $name:literal, $dial_code:literal, $flag:literal,
     $format:literal, $placeholder:literal, $max_length:literal) => {
        $crate::catalog::CountryRecord::new(
            $code, $name, $dial_code, $flag, $format, $placeholder, $max_length,
        )
    };
}

pub(crate) use country;
