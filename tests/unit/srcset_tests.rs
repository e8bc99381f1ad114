// Srcset generation unit tests
// Ladder shapes and exact descriptor strings mirror what the image service
// documents for responsive delivery; signed entries are cross-checked by
// recomputing the signature from the emitted query.

use std::collections::HashMap;

use imgix::{signature, DprPolicy, SrcsetOptions, UrlBuilder};

const EXPECTED_DEFAULT_WIDTHS: [u32; 31] = [
    100, 116, 135, 156, 181, 210, 244, 283, 328, 380, 441, 512, 594, 689, 799, 927, 1075, 1247,
    1446, 1678, 1946, 2257, 2619, 3038, 3524, 4087, 4741, 5500, 6380, 7401, 8192,
];

fn builder(domain: &str, use_https: bool, sign_key: &str) -> UrlBuilder {
    let mut builder = UrlBuilder::new(domain).expect("valid domain");
    builder.set_use_https(use_https);
    builder.set_sign_key(sign_key);
    builder.set_include_library_param(false);
    builder
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn lines(srcset: &str) -> Vec<&str> {
    srcset.split(",\n").collect()
}

/// Width descriptor (`"212w"` → 212) from a srcset line.
fn width_of(line: &str) -> u32 {
    let descriptor = line.split(' ').nth(1).unwrap();
    descriptor.trim_end_matches('w').parse().unwrap()
}

/// Re-derive the expected signature for a signed srcset line.
fn check_signature(line: &str, sign_key: &str, path: &str) {
    let url = line.split(' ').next().unwrap();
    let query = url.split('?').nth(1).expect("signed URL has a query");

    let (base, sig) = match query.rsplit_once("&s=") {
        Some((base, sig)) => (base, sig),
        None => ("", query.strip_prefix("s=").unwrap()),
    };

    assert_eq!(sig, signature::sign(sign_key, path, base));
}

#[test]
fn test_no_parameters_generates_default_widths() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub.create_srcset("image.jpg", &HashMap::new()).unwrap();

    let entries = lines(&srcset);
    assert_eq!(entries.len(), 31);
    for (line, expected) in entries.iter().zip(EXPECTED_DEFAULT_WIDTHS) {
        assert_eq!(width_of(line), expected);
    }
}

#[test]
fn test_no_parameters_stays_within_bounds() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub.create_srcset("image.jpg", &HashMap::new()).unwrap();

    let entries = lines(&srcset);
    assert!(width_of(entries.first().unwrap()) >= 100);
    assert!(width_of(entries.last().unwrap()) <= 8192);
}

#[test]
fn test_no_parameters_growth_under_17_percent() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub.create_srcset("image.jpg", &HashMap::new()).unwrap();

    let entries = lines(&srcset);
    let mut prev = width_of(entries[0]) as f64;
    for line in &entries[1..] {
        let width = width_of(line) as f64;
        assert!(width / prev < 1.17);
        prev = width;
    }
}

#[test]
fn test_no_parameters_signs_every_url() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub.create_srcset("image.jpg", &HashMap::new()).unwrap();

    for line in lines(&srcset) {
        check_signature(line, "MYT0KEN", "/image.jpg");
    }
}

#[test]
fn test_width_param_switches_to_dpr_form() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub
        .create_srcset("image.jpg", &params(&[("w", "300")]))
        .unwrap();

    let entries = lines(&srcset);
    assert_eq!(entries.len(), 5);
    for (index, line) in entries.iter().enumerate() {
        let descriptor = line.split(' ').nth(1).unwrap();
        assert_eq!(descriptor, format!("{}x", index + 1));
        assert!(line.contains(&format!("dpr={}", index + 1)));
        check_signature(line, "MYT0KEN", "/image.jpg");
    }
}

#[test]
fn test_height_alone_generates_width_ladder() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub
        .create_srcset("image.jpg", &params(&[("h", "300")]))
        .unwrap();

    let entries = lines(&srcset);
    assert_eq!(entries.len(), 31);
    for (line, expected) in entries.iter().zip(EXPECTED_DEFAULT_WIDTHS) {
        assert_eq!(width_of(line), expected);
        assert!(line.contains("h=300"));
    }
}

#[test]
fn test_aspect_ratio_alone_generates_width_ladder() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub
        .create_srcset("image.jpg", &params(&[("ar", "3:2")]))
        .unwrap();

    let entries = lines(&srcset);
    assert_eq!(entries.len(), 31);
    for line in &entries {
        assert!(line.contains("ar=3%3A2"));
    }
}

#[test]
fn test_height_and_aspect_ratio_switch_to_dpr_form() {
    let ub = builder("test.imgix.net", true, "MYT0KEN");
    let srcset = ub
        .create_srcset("image.jpg", &params(&[("h", "300"), ("ar", "3:2")]))
        .unwrap();

    let entries = lines(&srcset);
    assert_eq!(entries.len(), 5);
    for (index, line) in entries.iter().enumerate() {
        assert!(line.contains(&format!("dpr={}", index + 1)));
        check_signature(line, "MYT0KEN", "/image.jpg");
    }
}

#[test]
fn test_legacy_policy_treats_bare_height_as_dpr() {
    let mut ub = builder("test.imgix.net", true, "");
    ub.set_dpr_policy(DprPolicy::WidthOrHeight);

    let srcset = ub
        .create_srcset("image.jpg", &params(&[("h", "300")]))
        .unwrap();

    assert_eq!(lines(&srcset).len(), 5);
}

#[test]
fn test_variable_quality_on_by_default() {
    let ub = builder("test.imgix.net", false, "");
    let expected = "http://test.imgix.net/image.png?dpr=1&q=75&w=320 1x,\n\
                    http://test.imgix.net/image.png?dpr=2&q=50&w=320 2x,\n\
                    http://test.imgix.net/image.png?dpr=3&q=35&w=320 3x,\n\
                    http://test.imgix.net/image.png?dpr=4&q=23&w=320 4x,\n\
                    http://test.imgix.net/image.png?dpr=5&q=20&w=320 5x";

    let srcset = ub
        .create_srcset("image.png", &params(&[("w", "320")]))
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_disable_variable_quality() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        disable_variable_quality: true,
        ..SrcsetOptions::default()
    };
    let expected = "http://test.imgix.net/image.png?dpr=1&w=320 1x,\n\
                    http://test.imgix.net/image.png?dpr=2&w=320 2x,\n\
                    http://test.imgix.net/image.png?dpr=3&w=320 3x,\n\
                    http://test.imgix.net/image.png?dpr=4&w=320 4x,\n\
                    http://test.imgix.net/image.png?dpr=5&w=320 5x";

    let srcset = ub
        .create_srcset_with_options("image.png", &params(&[("w", "320")]), &options)
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_caller_quality_wins_over_variable_quality() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        disable_variable_quality: true,
        ..SrcsetOptions::default()
    };
    let expected = "http://test.imgix.net/image.png?dpr=1&q=99&w=320 1x,\n\
                    http://test.imgix.net/image.png?dpr=2&q=99&w=320 2x,\n\
                    http://test.imgix.net/image.png?dpr=3&q=99&w=320 3x,\n\
                    http://test.imgix.net/image.png?dpr=4&q=99&w=320 4x,\n\
                    http://test.imgix.net/image.png?dpr=5&q=99&w=320 5x";

    let srcset = ub
        .create_srcset_with_options("image.png", &params(&[("w", "320"), ("q", "99")]), &options)
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_caller_quality_kept_when_variable_quality_enabled() {
    let ub = builder("test.imgix.net", false, "");
    let expected = "http://test.imgix.net/image.png?ar=4%3A3&dpr=1&h=100&q=99 1x,\n\
                    http://test.imgix.net/image.png?ar=4%3A3&dpr=2&h=100&q=99 2x,\n\
                    http://test.imgix.net/image.png?ar=4%3A3&dpr=3&h=100&q=99 3x,\n\
                    http://test.imgix.net/image.png?ar=4%3A3&dpr=4&h=100&q=99 4x,\n\
                    http://test.imgix.net/image.png?ar=4%3A3&dpr=5&h=100&q=99 5x";

    let srcset = ub
        .create_srcset(
            "image.png",
            &params(&[("ar", "4:3"), ("h", "100"), ("q", "99")]),
        )
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_custom_begin_end_range() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        begin: 100,
        end: 380,
        ..SrcsetOptions::default()
    };
    let expected = "http://test.imgix.net/image.png?w=100 100w,\n\
                    http://test.imgix.net/image.png?w=116 116w,\n\
                    http://test.imgix.net/image.png?w=135 135w,\n\
                    http://test.imgix.net/image.png?w=156 156w,\n\
                    http://test.imgix.net/image.png?w=181 181w,\n\
                    http://test.imgix.net/image.png?w=210 210w,\n\
                    http://test.imgix.net/image.png?w=244 244w,\n\
                    http://test.imgix.net/image.png?w=283 283w,\n\
                    http://test.imgix.net/image.png?w=328 328w,\n\
                    http://test.imgix.net/image.png?w=380 380w";

    let srcset = ub
        .create_srcset_with_options("image.png", &HashMap::new(), &options)
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_custom_range_with_one_percent_tolerance() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        begin: 100,
        end: 108,
        tolerance: 0.01,
        ..SrcsetOptions::default()
    };
    let expected = "http://test.imgix.net/image.png?w=100 100w,\n\
                    http://test.imgix.net/image.png?w=102 102w,\n\
                    http://test.imgix.net/image.png?w=104 104w,\n\
                    http://test.imgix.net/image.png?w=106 106w,\n\
                    http://test.imgix.net/image.png?w=108 108w";

    let srcset = ub
        .create_srcset_with_options("image.png", &HashMap::new(), &options)
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_fifty_percent_tolerance() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        tolerance: 0.50,
        ..SrcsetOptions::default()
    };
    let expected = "http://test.imgix.net/image.png?w=100 100w,\n\
                    http://test.imgix.net/image.png?w=200 200w,\n\
                    http://test.imgix.net/image.png?w=400 400w,\n\
                    http://test.imgix.net/image.png?w=800 800w,\n\
                    http://test.imgix.net/image.png?w=1600 1600w,\n\
                    http://test.imgix.net/image.png?w=3200 3200w,\n\
                    http://test.imgix.net/image.png?w=6400 6400w,\n\
                    http://test.imgix.net/image.png?w=8192 8192w";

    let srcset = ub
        .create_srcset_with_options("image.png", &HashMap::new(), &options)
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_begin_equals_end_single_entry() {
    let ub = builder("test.imgix.net", false, "");
    let options = SrcsetOptions {
        begin: 640,
        end: 640,
        ..SrcsetOptions::default()
    };

    let srcset = ub
        .create_srcset_with_options("image.png", &HashMap::new(), &options)
        .unwrap();
    assert_eq!(srcset, "http://test.imgix.net/image.png?w=640 640w");
}

#[test]
fn test_explicit_width_list() {
    let ub = builder("test.imgix.net", false, "");
    let expected = "http://test.imgix.net/image.png?w=100 100w,\n\
                    http://test.imgix.net/image.png?w=500 500w,\n\
                    http://test.imgix.net/image.png?w=1000 1000w";

    let srcset = ub
        .create_srcset_from_widths("image.png", &HashMap::new(), &[100, 500, 1000])
        .unwrap();
    assert_eq!(srcset, expected);
}

#[test]
fn test_invalid_inputs_produce_no_output() {
    let ub = builder("test.imgix.net", false, "");
    let empty = HashMap::new();

    let inverted = SrcsetOptions {
        begin: 8192,
        end: 100,
        ..SrcsetOptions::default()
    };
    assert!(ub
        .create_srcset_with_options("image.png", &empty, &inverted)
        .is_err());

    let tiny_tolerance = SrcsetOptions {
        tolerance: 0.005,
        ..SrcsetOptions::default()
    };
    assert!(ub
        .create_srcset_with_options("image.png", &empty, &tiny_tolerance)
        .is_err());

    assert!(ub.create_srcset_from_widths("image.png", &empty, &[]).is_err());
    assert!(ub
        .create_srcset_from_widths("image.png", &empty, &[100, -500])
        .is_err());
}

#[test]
fn test_caller_params_are_never_mutated() {
    let ub = builder("test.imgix.net", false, "");
    let caller = params(&[("w", "320")]);
    let snapshot = caller.clone();

    ub.create_srcset("image.png", &caller).unwrap();
    ub.create_srcset_from_widths("image.png", &caller, &[100, 200])
        .unwrap();

    assert_eq!(caller, snapshot);
}
