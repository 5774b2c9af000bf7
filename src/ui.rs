// Simulated UI subsystem.

/// UI operations consumed by generated programs.
///
/// The shipped implementation is [`SimulatedUi`]; a real windowing backend
/// can be substituted behind the same contract.
pub trait UserInterface {
    /// Bring up the UI subsystem.
    fn init(&mut self);

    /// Run one event-loop cycle and return.
    fn run_cycle(&mut self);

    /// Show `message` to the user.
    fn say(&mut self, message: &str);
}

/// UI simulation: announcements only, no window is created.
#[derive(Debug, Default)]
pub struct SimulatedUi;

impl UserInterface for SimulatedUi {
    fn init(&mut self) {
        println!("[HAPPY] UI Subsystem Initialized. Window created.");
    }

    fn run_cycle(&mut self) {
        println!("[HAPPY] Entering Event Loop... (Press Ctrl+C to exit)");
        println!("[HAPPY] Event Loop Cycle Complete.");
    }

    fn say(&mut self, message: &str) {
        println!("[JOY] {}", message);
    }
}

/// Initialize the simulated UI subsystem.
pub fn ui_init() {
    SimulatedUi.init()
}

/// Run one simulated event-loop cycle.
///
/// Returns immediately after the cycle; a real event loop would block.
pub fn ui_loop() {
    SimulatedUi.run_cycle()
}

/// Show a user-facing message.
pub fn say(message: &str) {
    SimulatedUi.say(message)
}
