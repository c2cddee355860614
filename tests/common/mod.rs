use std::{fs, path::Path};

use tempfile::TempDir;

pub const MONTHLY: &str = "\
# recurring chores
[Chores]
Trash = 04-12
Rent = 05-01
";

pub const YEARLY: &str = "\
[Birthdays]
symbol = *
Alice = 1990-04-12
Carol = 1971-04-05

[Holidays]
symbol = +
Christmas = 12-25
";

/// Creates an isolated home directory with both config files.
pub fn setup_home() -> TempDir {
    let home = TempDir::new().expect("create temp dir");
    write_config(home.path(), MONTHLY, YEARLY);
    home
}

pub fn write_config(home: &Path, monthly: &str, yearly: &str) {
    let config = home.join("config");
    fs::create_dir_all(&config).expect("create config dir");
    fs::write(config.join("monthly.ini"), monthly).expect("write monthly.ini");
    fs::write(config.join("yearly.ini"), yearly).expect("write yearly.ini");
}
