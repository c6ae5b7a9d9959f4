use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

use crate::perceptron::TrainingHistory;
use crate::error::{Result, PerceptronError};

const SIZE: (u32, u32) = (1024, 480);
const FONT: (&str, u32) = ("sans-serif", 20);


impl TrainingHistory {
    /// Draw the errors and the accuracy per epoch
    /// side by side into the SVG file `path`.
    pub fn plot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        draw(self, path.as_ref())
            .map_err(|e| PerceptronError::Plot(e.to_string()))
    }
}


fn draw(history: &TrainingHistory, path: &Path)
    -> std::result::Result<(), Box<dyn Error>>
{
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, 2));
    let epochs = 1..history.len().max(1) + 1;


    let max_errors = history.errors_per_epoch()
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    let mut chart = ChartBuilder::on(&areas[0])
        .caption("Errors per epoch", FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(epochs.clone(), 0..max_errors)?;
    chart.configure_mesh()
        .x_desc("Epoch")
        .y_desc("Errors")
        .draw()?;
    chart.draw_series(LineSeries::new(
        history.errors_per_epoch()
            .iter()
            .enumerate()
            .map(|(i, &errors)| (i + 1, errors)),
        &RED,
    ))?;


    let mut chart = ChartBuilder::on(&areas[1])
        .caption("Training accuracy", FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(epochs, 0f64..1f64)?;
    chart.configure_mesh()
        .x_desc("Epoch")
        .y_desc("Accuracy")
        .draw()?;
    chart.draw_series(LineSeries::new(
        history.accuracy_per_epoch()
            .iter()
            .enumerate()
            .map(|(i, &accuracy)| (i + 1, accuracy)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}
