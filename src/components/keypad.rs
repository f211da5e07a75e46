use dioxus::prelude::*;

/// (key, sub-label) in row order
pub const KEYPAD_LAYOUT: [(&str, &str); 12] = [
    ("1", ""), ("2", "ABC"), ("3", "DEF"),
    ("4", "GHI"), ("5", "JKL"), ("6", "MNO"),
    ("7", "PQRS"), ("8", "TUV"), ("9", "WXYZ"),
    ("*", ""), ("0", "+"), ("#", ""),
];

#[component]
pub fn Keypad(
    disabled: bool,
    on_key_press: EventHandler<String>
) -> Element {
    rsx! {
        div {
            class: "keypad",
            for (key, sublabel) in KEYPAD_LAYOUT {
                button {
                    key: "{key}",
                    class: "keypad-button",
                    disabled: disabled,
                    onclick: move |_| on_key_press.call(key.to_string()),
                    span { class: "keypad-label", "{key}" }
                    if !sublabel.is_empty() {
                        span { class: "keypad-sublabel", "{sublabel}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_a_phone_grid() {
        let keys: String = KEYPAD_LAYOUT.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, "123456789*0#");
        assert_eq!(KEYPAD_LAYOUT[10].1, "+");
    }
}
