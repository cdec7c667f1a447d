//! Fuzz target for upload loading and profiling.
//!
//! Arbitrary bytes must either be rejected with an error or produce a dataset
//! whose column information, statistics, classification and figures can all
//! be built without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvscope::{ChartKind, ChartRequest, Explorer};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let explorer = Explorer::new();
    let Ok(loaded) = explorer.load_bytes("fuzz.csv", data) else {
        return;
    };
    let dataset = &loaded.dataset;

    let _ = explorer.report(&loaded);

    let names = dataset.column_names();
    let (Some(first), Some(last)) = (names.first(), names.last()) else {
        return;
    };
    for kind in ChartKind::ALL {
        let request = ChartRequest::new(kind).with_x(*first).with_y(*last);
        let _ = explorer.plot(dataset, &request);
    }
});
