#![no_main]

use libfuzzer_sys::fuzz_target;
use songforge_spec::{normalize_seed, page_seed, GenerationRequest};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Seed text either parses or is rejected; it never panics.
    if let Some(seed) = normalize_seed(text) {
        let _ = page_seed(seed, 1);
    }

    if let Ok(request) = serde_json::from_str::<GenerationRequest>(text) {
        if request.validate().is_ok() {
            assert!(request.page >= 1);
            assert!(request.page_size >= 1);
            assert!(request.avg_likes >= 0.0);
        }
        let _ = request.first_index();
    }
});
