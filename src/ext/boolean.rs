pub trait BoolExt {
    /// Returns the negated value.
    fn toggle(self) -> bool;
    fn to_yes_no(self) -> &'static str;
    fn to_on_off(self) -> &'static str;
    /// `1` for `true`, `0` for `false`.
    fn to_int(self) -> i32;
    fn to_str_with<'a>(self, true_text: &'a str, false_text: &'a str) -> &'a str;
}

impl BoolExt for bool {
    fn toggle(self) -> bool {
        !self
    }

    fn to_yes_no(self) -> &'static str {
        self.to_str_with("Yes", "No")
    }

    fn to_on_off(self) -> &'static str {
        self.to_str_with("On", "Off")
    }

    fn to_int(self) -> i32 {
        i32::from(self)
    }

    fn to_str_with<'a>(self, true_text: &'a str, false_text: &'a str) -> &'a str {
        if self {
            true_text
        } else {
            false_text
        }
    }
}
