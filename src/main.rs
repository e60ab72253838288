/// Binary entrypoint for the `client-runner` executable.
///
/// Keeps the binary thin; the flow lives in the `client_runner_lib` crate so
/// tests can drive it with scripted dialogs.
fn main() {
    client_runner_lib::run();
}
