#![no_main]

use libfuzzer_sys::fuzz_target;
use shipyard::domain::value_objects::Url;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // A parsed url must parse again to itself
        if let Ok(url) = Url::parse(raw) {
            let again = Url::parse(url.as_str()).expect("normalized url must parse");
            assert_eq!(again, url);
        }
    }
});
