//! Fuzz target for timestamp parsing and date-column coercion.

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvscope::inference::parse_timestamp;
use csvscope::Explorer;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_timestamp(content);

    // A date-named column either coerces every value or fails the load.
    let csv = format!("order_date,value\n\"{}\",1\n", content.replace('"', "\"\""));
    if let Ok(loaded) = Explorer::new().load_bytes("fuzz.csv", csv.as_bytes()) {
        let column = loaded.dataset.column("order_date");
        assert!(column.is_some());
    }
});
