pub mod ids {

    pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    pub const LENGTH: usize = 5;
}

pub mod dates {

    /// Format accepted for `date`, `from` and `to` inputs.
    pub const INPUT_FORMAT: &str = "%Y-%m-%d";

    /// Human readable form used in responses, e.g. `Fri Jan 01 2021`.
    pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";
}

pub mod messages {

    pub const USERNAME_TAKEN: &str = "Username already taken";

    pub const NOT_FOUND: &str = "not found";
}
