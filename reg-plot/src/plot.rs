use std::error::Error;

use plotters::prelude::*;

use super::Series;

/// Fraction of the data range added on each side of the axes
const AXIS_PADDING: f64 = 0.05;

/// Plot the samples as a scatter and the model predictions as a line
///
/// # Arguments:
/// points: the observed (x, y) samples
/// fit_line: (x, prediction) pairs, drawn in ascending x order
/// title: caption of the chart
/// filename: where to write the bitmap
/// dims: width and height in pixels
pub fn plot_fit(
    points: &Series,
    fit_line: &Series,
    title: &str,
    filename: &str,
    dims: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    info!("n_points: {}, n_fit: {}", points.len(), fit_line.len());

    let ((x_min, x_max), (y_min, y_max)) =
        bounds(points.iter().chain(fit_line.iter())).ok_or("nothing to plot")?;
    debug!("x: {}..{}, y: {}..{}", x_min, x_max, y_min, y_max);

    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut cc0 = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(title, ("sans-serif", 30).into_font().with_color(&BLACK))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    cc0.configure_mesh()
        .x_labels(20)
        .y_labels(20)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    cc0.draw_series(points.iter().map(|(x, y)| Circle::new((*x, *y), 4, BLACK.filled())))?
        .label("samples")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));
    cc0.draw_series(LineSeries::new(sorted_by_x(fit_line), BLUE.stroke_width(3)))?
        .label("prediction")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));
    cc0.configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root_area.present()?;
    info!("successfully plotted to {}", filename);

    Ok(())
}

/// Padded x and y ranges covering all the given points.
/// Returns `None` if there are no finite points.
pub fn bounds<'a, I>(points: I) -> Option<((f64, f64), (f64, f64))>
where
    I: IntoIterator<Item = &'a (f64, f64)>,
{
    let mut iter = points.into_iter().filter(|(x, y)| x.is_finite() && y.is_finite());
    let &(x0, y0) = iter.next()?;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = (x0, x0, y0, y0);
    for &(x, y) in iter {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    Some((pad(x_min, x_max), pad(y_min, y_max)))
}

/// Copy of the series with its points in ascending x order
pub fn sorted_by_x(series: &Series) -> Series {
    let mut sorted = series.clone();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    sorted
}

fn pad(min: f64, max: f64) -> (f64, f64) {
    let padding = if max > min { (max - min) * AXIS_PADDING } else { 1.0 };
    (min - padding, max + padding)
}
