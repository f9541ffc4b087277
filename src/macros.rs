/// Concatenates string-like expressions into a single owned `String`.
#[macro_export]
macro_rules! concat_str {
    ($($part:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $(
            out.push_str(::core::convert::AsRef::<str>::as_ref(&$part));
        )+
        out
    }};
}
