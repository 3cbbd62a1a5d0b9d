use serde_json::{Value, json};

/// A single base entry and one child that extends it.
pub fn frame_and_title() -> Value {
    json!({
        "frame": { "x": 38, "y": 38 },
        "title": { "extends": "frame", "x": 38, "y": 50, "width": 100 }
    })
}

/// Two parents that both set `b`; the child lists `aunt` last.
pub fn uncle_aunt_child() -> Value {
    json!({
        "uncle": { "x": 104, "y": 105, "b": 106 },
        "aunt": { "a": 101, "b": 102, "c": 103 },
        "child": { "extends": ["uncle", "aunt"], "a": 107, "x": 108 }
    })
}

/// A four-level chain that adjusts `x` and `y` at each level.
pub fn nested_adjustments() -> Value {
    json!({
        "frame": { "x": 38, "y": 38, "width": 100 },
        "title": { "extends": "frame", "y": "+= 50" },
        "subtitle": { "extends": "title", "y": "+=50", "x": "-= 8" },
        "footnote": { "extends": "subtitle", "y": "+=100.5", "width": "+=1" }
    })
}

pub fn self_extending() -> Value {
    json!({ "a": { "extends": "a", "x": 1 } })
}

pub fn two_cycle() -> Value {
    json!({
        "a": { "extends": "b", "x": 1 },
        "b": { "extends": "a", "x": 2 }
    })
}

pub fn three_cycle() -> Value {
    json!({
        "a": { "extends": "b" },
        "b": { "extends": "c" },
        "c": { "extends": "a" }
    })
}
