//! Standalone entry point: renders the stopwatch into the document body.

use stopwatch::Stopwatch;

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<Stopwatch>::new().render();
}
