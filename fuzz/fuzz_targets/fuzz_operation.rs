#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::json;
use treepick::{Action, Store, TreeConfig};

fuzz_target!(|data: &[u8]| {
    // Operation strings either parse or fail; applying a parsed one never panics
    if let Ok(op) = std::str::from_utf8(data) {
        if let Ok(action) = op.parse::<Action>() {
            let mut store = Store::new(
                &json!({ "name": "r", "dirs": [{ "name": "a", "files": ["x"] }], "files": ["y"] }),
                TreeConfig::default(),
            );
            let _ = store.commit(action);
        }
    }
});
