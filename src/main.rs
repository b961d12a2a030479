//! tipcalc main entrypoint.

use tipcalc::run;
use tipcalc::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
