#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::{StringComparison, SuffixArray};

fuzz_target!(|input: (String, String, bool)| {
    let (text, key, ignore_case) = input;
    let policy = if ignore_case {
        StringComparison::OrdinalIgnoreCase
    } else {
        StringComparison::Ordinal
    };

    let Ok(sa) = SuffixArray::with_comparison(text, policy) else {
        return;
    };

    // Exercise every query; none may panic on valid indices
    let rank = sa.rank(&key);
    assert!(rank <= sa.len());
    let _ = sa.positions(&key);
    let lcps = sa.lcp_array();
    assert_eq!(lcps.len(), sa.len());
    for i in 0..sa.len() {
        assert_eq!(sa.longest_common_prefix(i).ok(), Some(lcps[i]));
        assert!(sa.length_of(i).is_ok());
    }
    assert!(sa.suffix(sa.len()).is_err());
});
