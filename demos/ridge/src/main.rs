#[macro_use]
extern crate log;

use std::{error::Error, fs, io, time::Instant};

use common::{make_regression, mean_squared_error, Dataset};
use dialoguer::{theme::ColorfulTheme, Select};
use lin_reg::{GradientDescent, LinReg, RidgeRegression};
use log::LevelFilter;
use optimizers::{GridSearch, KFoldEnvironment};
use reg_plot::{plot_fit, Series};

const N_SAMPLES: usize = 100;
const BIAS: f64 = 3.0;
const NOISE: f64 = 10.0;
const TEST_SIZE: f64 = 0.4;
const K: usize = 10;
const REG_START: f64 = 0.0;
const REG_STOP: f64 = 0.3;
const REG_STEP: f64 = 0.001;
const SEED: Option<u64> = Some(0);
const PLOT_FILE: &str = "img/ridge_regression.png";

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let (dataset, coef) = make_regression(N_SAMPLES, 1, BIAS, NOISE, SEED)?;
    info!("got {} samples, true coefficient: {}", dataset.nsamples(), coef[0]);
    let (train, test) = dataset.train_test_split(TEST_SIZE, SEED)?;

    info!("Finding regularization constant using cross validation:");
    let t0 = Instant::now();
    let env = KFoldEnvironment::new(train.clone(), K, SEED);
    let mut search = GridSearch::arange(REG_START, REG_STOP, REG_STEP);
    let best = search.run(&env, gradient_descent)?;
    info!(
        "Mean squared error: {} (given by reg. factor: {}), search took {}ms",
        search.best_error(),
        best,
        t0.elapsed().as_millis()
    );

    let solvers = vec!["Gradient Descent", "Closed Form (SVD)"];
    let s = solver_or_default(
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select solver for the final model")
            .items(&solvers)
            .default(0)
            .interact(),
    );
    match s {
        0 => run(RidgeRegression::new(gradient_descent(best)), &train, &test),
        1 => run(RidgeRegression::closed_form(best), &train, &test),
        _ => Err("invalid solver selection".into()),
    }
}

/// Falls back to gradient descent when there is no terminal to prompt on
fn solver_or_default(selection: io::Result<usize>) -> usize {
    selection.unwrap_or_else(|e| {
        warn!("solver prompt unavailable ({}), using gradient descent", e);
        0
    })
}

/// Trainer with the default hyperparameters, used during the search as well
fn gradient_descent(regularization_coeff: f64) -> GradientDescent {
    GradientDescent { seed: SEED, ..GradientDescent::new(regularization_coeff) }
}

fn run<R>(
    mut model: RidgeRegression<R>,
    train: &Dataset,
    test: &Dataset,
) -> Result<(), Box<dyn Error>>
where
    R: LinReg,
{
    let t0 = Instant::now();
    model.fit(train.records(), train.targets())?;
    info!("training done in: {}μs", t0.elapsed().as_micros());
    if let Some(weights) = model.weights() {
        info!("weights (bias first): {}", weights);
    }

    let preds = model.predict(test.records())?;
    let mse = mean_squared_error(test.targets(), &preds)?;
    info!("Mean squared error on test set: {:.2}", mse);

    let xs = test.records().column(0);
    let points: Series = xs.iter().zip(test.targets().iter()).map(|(x, y)| (*x, *y)).collect();
    let fit_line: Series = xs.iter().zip(preds.iter()).map(|(x, p)| (*x, *p)).collect();

    fs::create_dir_all("img")?;
    plot_fit(
        &points,
        &fit_line,
        &format!("Ridge Regression ({:.2} MSE)", mse),
        PLOT_FILE,
        (1080, 720),
    )
}
