#![no_main]

use booktrack::{classify, parse_line, Operation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(book) = parse_line(line) {
        // Anything accepted must survive its own line form.
        let again = parse_line(&book.to_line()).expect("serialized book must parse");
        assert_eq!(again, book);
        assert!(matches!(
            classify(&book.to_line()),
            Operation::NewRecord(_)
        ));
    }
});
