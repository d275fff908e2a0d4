#![no_main]

use libfuzzer_sys::fuzz_target;
use svdataset::xml::{DatasetReader, XmlLayout};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must either parse or fail gracefully, never panic
    let mut reader = DatasetReader::new(data);

    for _ in 0..100 {
        match reader.next_dataset() {
            Ok(Some(dataset)) => {
                // Anything we accept must also serialize
                let mut out = Vec::new();
                let _ = dataset.write_xml(&mut out, &XmlLayout::default());
                let _ = dataset.instants().count();
            }
            Ok(None) => break,
            Err(_) => break,
        }
    }
});
