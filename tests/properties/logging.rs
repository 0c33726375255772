//! Log file naming properties.
use meowmatch::logging::rolled_file_path;
use proptest::{prelude::*, test_runner::Config};
use std::path::Path;

proptest! {
    #![proptest_config(Config { cases: 500, ..Config::default() })]

    #[test]
    fn rolled_file_name_format(
        year in 2000u32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        index in 1u32..1000,
    ) {
        let date_str = format!("{:04}-{:02}-{:02}", year, month, day);
        let path = rolled_file_path(Path::new("logs"), &date_str, index);

        prop_assert_eq!(path.parent().unwrap(), Path::new("logs"));
        let file_name = path.file_name().unwrap().to_str().unwrap();
        prop_assert_eq!(file_name, format!("meowmatch-{}.{}.log", date_str, index));
    }
}
