#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::{Store, TreeConfig};

fuzz_target!(|data: &[u8]| {
    // Any JSON document builds a store, and its export builds one too
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let config = TreeConfig::default();
        let store = Store::new(&value, config.clone());
        let _ = Store::new(&store.raw(), config);
        let _ = store.selected_paths();
    }
});
