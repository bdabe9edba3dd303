// ============================================================
// Layer 5 — Topic Network
// ============================================================
// The classifier itself: a fully-connected network mapping a
// multi-hot bag-of-words vector to a distribution over topics.
//
//   input [batch, 10000]
//     → Linear(10000 → 64) → relu
//     → Linear(64 → 64)    → relu
//     → Linear(64 → 46)    → logits
//
// forward() returns raw logits: the cross-entropy loss consumes
// logits directly and applies the numerically stable log-softmax
// internally. forward_probabilities() applies softmax for
// callers that need actual probabilities (the predictor).
//
// Reference: Burn Book §3 (Building Blocks)
//            Chollet (2018) Deep Learning with Python §3.5

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::{relu, softmax},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct TopicNetConfig {
    /// Width of the multi-hot input vector
    #[config(default = 10000)]
    pub input_dim: usize,

    /// Width of both hidden layers
    #[config(default = 64)]
    pub hidden_dim: usize,

    /// Number of topic classes
    #[config(default = 46)]
    pub num_classes: usize,
}

impl TopicNetConfig {
    /// Initialise a network with freshly sampled weights.
    pub fn init<B: Backend>(&self, device: &B::Device) -> TopicNet<B> {
        TopicNet {
            hidden1: LinearConfig::new(self.input_dim, self.hidden_dim)
                .init(device),
            hidden2: LinearConfig::new(self.hidden_dim, self.hidden_dim)
                .init(device),
            output: LinearConfig::new(self.hidden_dim, self.num_classes)
                .init(device),
        }
    }
}

/// The dense topic classifier.
#[derive(Module, Debug)]
pub struct TopicNet<B: Backend> {
    pub hidden1: Linear<B>,
    pub hidden2: Linear<B>,
    pub output: Linear<B>,
}

impl<B: Backend> TopicNet<B> {
    /// Forward pass returning logits of shape [batch, num_classes].
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.hidden1.forward(input));
        let x = relu(self.hidden2.forward(x));
        self.output.forward(x)
    }

    /// Forward pass returning per-class probabilities.
    /// Each row is non-negative and sums to 1.
    pub fn forward_probabilities(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        softmax(self.forward(input), 1)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};

    fn tiny_net() -> (TopicNet<NdArray>, NdArrayDevice) {
        let device = NdArrayDevice::Cpu;
        let net = TopicNetConfig::new()
            .with_input_dim(12)
            .with_hidden_dim(4)
            .with_num_classes(3)
            .init(&device);
        (net, device)
    }

    #[test]
    fn test_forward_shape() {
        let (net, device) = tiny_net();
        let input = Tensor::<NdArray, 2>::zeros([5, 12], &device);
        assert_eq!(net.forward(input).dims(), [5, 3]);
    }

    #[test]
    fn test_probabilities_form_a_distribution() {
        let (net, device) = tiny_net();
        let input = Tensor::<NdArray, 1>::from_floats(
            [1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
            &device,
        )
        .reshape([1, 12]);

        let probs: Vec<f32> = net
            .forward_probabilities(input)
            .into_data()
            .to_vec()
            .unwrap();

        assert_eq!(probs.len(), 3);
        assert!(probs.iter().all(|&p| p >= 0.0));
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_default_topology_matches_the_task() {
        let cfg = TopicNetConfig::new();
        assert_eq!(cfg.input_dim, 10000);
        assert_eq!(cfg.hidden_dim, 64);
        assert_eq!(cfg.num_classes, 46);
    }
}
