#![no_main]

use libfuzzer_sys::fuzz_target;
use shipyard::domain::value_objects::AppName;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(name) = AppName::parse(raw) {
            assert_eq!(name.as_str(), raw);
        }
    }
});
