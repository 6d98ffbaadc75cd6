use std::error::Error;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use germinal::{
    creators, mutators, Evaluator, Genotype, GerminalError, Hyper, Layer, Network,
    NetworkEvaluator, Optimizer,
};

fn sum_of_squares() -> Evaluator<'static> {
    Box::new(|g: &Genotype| -> Result<f64, GerminalError> {
        Ok(g.iter().map(|x| x * x).fold(0., |a, v| a + v))
    })
}

#[test]
fn seeded_optimizer_runs_are_bit_identical() {
    let run = |seed: u64| -> Genotype {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut hyper = Hyper::new();
        hyper.pool_size = 12;
        hyper.max_generations = 400;

        let mut optimizer = Optimizer::new(
            hyper,
            creators::real(5, 4., -4.),
            mutators::real(4., -4., 0.01),
            sum_of_squares(),
            &mut rng,
        )
        .unwrap();

        optimizer.evolve(&mut rng).unwrap()
    };

    let a = run(99);
    let b = run(99);
    assert_eq!(a, b);

    assert_ne!(run(100), a);
}

fn line_fit_evaluator() -> NetworkEvaluator {
    // Target: y = 2x - 1 over a handful of probe points.
    Rc::new(|net: &Network| -> Result<f64, Box<dyn Error>> {
        let mut total = 0.;
        for x in [-1., 0., 1., 2.] {
            let y = net.forward(vec![x]);
            total += (y[0] - (2. * x - 1.)).powi(2);
        }
        Ok(total)
    })
}

#[test]
fn network_evolve_fits_a_line() {
    let mut rng = StdRng::seed_from_u64(7);

    let layers = vec![Layer::linear(1, 1, true, &mut rng)];
    let mut net = Network::new(layers, line_fit_evaluator()).unwrap();

    let error = net.evolve(&Hyper::new(), &mut rng).unwrap();

    assert!(error < 1.);
    assert_eq!(net.error(), Some(error));

    // The winning weights stay inside the creator's bounds.
    let w = net.flatten();
    assert_eq!(w.len(), 2);
    assert!(w.iter().all(|x| *x >= -4. && *x <= 4.));
}

#[test]
fn network_evolve_is_deterministic_under_a_seed() {
    let run = |seed: u64| -> (f64, Genotype) {
        let mut rng = StdRng::seed_from_u64(seed);

        let layers = vec![
            Layer::linear(1, 2, true, &mut rng),
            Layer::tanh(),
            Layer::linear(2, 1, true, &mut rng),
        ];
        let mut net = Network::new(layers, line_fit_evaluator()).unwrap();

        let mut hyper = Hyper::new();
        hyper.max_generations = 300;

        let error = net.evolve(&hyper, &mut rng).unwrap();
        (error, net.flatten())
    };

    let (error_a, weights_a) = run(42);
    let (error_b, weights_b) = run(42);

    assert_eq!(error_a, error_b);
    assert_eq!(weights_a, weights_b);
}
