// Simulated model lifecycle: spawn, train, save, infer.

use std::fmt;
use uuid::Uuid;

/// Fixed response returned by every simulated inference call, regardless of
/// the prompt.
pub const SIMULATED_RESPONSE: &str = "After native contemplation, I have evolved.";

/// One simulated learning entity.
///
/// A `Model` can only be obtained from [`Model::spawn`]; holding one is the
/// proof that the lifecycle started, so training or inferring on a model
/// that was never spawned is unrepresentable. `model_type` and `focus` are
/// fixed for the model's whole life and `trained_count` grows by exactly
/// one per [`Model::train`] call.
///
/// A model is exclusively owned by the caller that spawned it. It is
/// deliberately not `Clone`: nothing in the runtime aliases a model across
/// subsystems.
///
/// # Example
/// ```
/// use emo_runtime::model::Model;
///
/// let mut m = Model::spawn("classifier", "text");
/// m.train("set1");
/// m.train("set2");
/// assert_eq!(m.trained_count(), 2);
/// ```
#[derive(Debug)]
pub struct Model {
    id: Uuid,
    model_type: String,
    focus: String,
    trained_count: u64,
}

impl Model {
    /// Spawn a new model.
    ///
    /// Always succeeds; any text is accepted for `model_type` and `focus`,
    /// including the empty text. The fresh model has trained on nothing.
    pub fn spawn<T: Into<String>, F: Into<String>>(model_type: T, focus: F) -> Self {
        let model_type = model_type.into();
        let focus = focus.into();
        println!(
            "[MIND] Spawning native model: {} (focus: {})",
            model_type, focus
        );
        Self {
            id: Uuid::new_v4(),
            model_type,
            focus,
            trained_count: 0,
        }
    }

    /// Opaque identifier assigned at spawn time.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The model type chosen at spawn time.
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// The focus chosen at spawn time.
    pub fn focus(&self) -> &str {
        &self.focus
    }

    /// Number of completed training passes.
    pub fn trained_count(&self) -> u64 {
        self.trained_count
    }

    /// Run one training pass over `data`.
    pub fn train(&mut self, data: &str) {
        println!("[MIND] Training native {} on {}...", self.model_type, data);
        self.trained_count += 1;
    }

    /// Announce a save to `path`.
    ///
    /// No bytes are written to `path`; the runtime defines no persistence
    /// format. The model is unchanged and may be trained further or saved
    /// again afterwards.
    pub fn save(&self, path: &str) {
        println!("[MIND] Saving native model to {}...", path);
    }

    /// Ask the model about `prompt`.
    ///
    /// Simulation boundary: the returned text is [`SIMULATED_RESPONSE`],
    /// fixed and independent of `prompt`. No inference engine runs behind
    /// this call; callers inspecting the return value must not treat it as
    /// a real result.
    pub fn infer(&self, prompt: &str) -> &'static str {
        println!(
            "[MIND] Native model {} is thinking about: {}",
            self.model_type, prompt
        );
        SIMULATED_RESPONSE
    }

    /// Ask `backend` about `prompt` instead of the built-in simulation.
    ///
    /// Substituting a real engine happens here, without touching the
    /// lifecycle itself.
    pub fn infer_with<I: Inference>(&self, backend: &mut I, prompt: &str) -> String {
        println!(
            "[MIND] Native model {} is thinking about: {}",
            self.model_type, prompt
        );
        backend.respond(&self.model_type, prompt)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Model({}:{})", self.model_type, self.id)
    }
}

/// Response generation behind [`Model::infer_with`].
pub trait Inference {
    /// Produce a response for `prompt` from a model of the given type.
    fn respond(&mut self, model_type: &str, prompt: &str) -> String;
}

/// Inference stand-in that always answers [`SIMULATED_RESPONSE`].
#[derive(Debug, Default)]
pub struct SimulatedInference;

impl Inference for SimulatedInference {
    fn respond(&mut self, _model_type: &str, _prompt: &str) -> String {
        SIMULATED_RESPONSE.to_string()
    }
}
