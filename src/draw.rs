//! # Draw
//! Renders a finished planning run to a PNG: obstacles in red, start in green, goal in blue,
//! the tree in grey and the path in magenta. Only reads the immutable [`RRTResult`] snapshot.
use crate::common::{Point, Rectangle};
use crate::rrt::{RRTParams, RRTResult};
use crate::rrt_error::{map_err_to_draw_err, RRTError, Result};
use crate::scenario::Scenario;
use crate::utils;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;

type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const MARKER_RADIUS: i32 = 5;

/// Region shown in the image: the workspace, grown to include start and goal.
pub fn plot_bounds(scenario: &Scenario, params: &RRTParams) -> Rectangle {
    let markers =
        utils::bbox_from_corner_points(&scenario.start, &scenario.goal, params.step_size);
    let min_x = markers.x.min(0.0);
    let min_y = markers.y.min(0.0);
    let max_x = (markers.x + markers.width).max(params.workspace_width);
    let max_y = (markers.y + markers.height).max(params.workspace_height);
    Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

pub fn draw_tree(
    filename: impl AsRef<Path>,
    size: (u32, u32),
    result: &RRTResult,
    scenario: &Scenario,
    params: &RRTParams,
) -> Result<()> {
    let filename = filename.as_ref();
    let drawing_area = BitMapBackend::new(filename, size).into_drawing_area();
    drawing_area.fill(&WHITE).map_err(map_err_to_draw_err)?;

    let bounds = plot_bounds(scenario, params);
    let mut chart = ChartBuilder::on(&drawing_area)
        .margin(10)
        .build_cartesian_2d(
            bounds.x..bounds.x + bounds.width,
            bounds.y..bounds.y + bounds.height,
        )
        .map_err(map_err_to_draw_err)?;

    draw_obstacles(&mut chart, scenario)?;
    draw_tree_lines(&mut chart, result)?;
    if result.is_found() {
        draw_path(&mut chart, result.path())?;
    }
    chart
        .draw_series([
            Circle::new(xy(&scenario.start), MARKER_RADIUS, GREEN.filled()),
            Circle::new(xy(&scenario.goal), MARKER_RADIUS, BLUE.filled()),
        ])
        .map_err(map_err_to_draw_err)?;

    drawing_area
        .present()
        .map_err(|e| RRTError::Draw(format!("{}: {}", filename.display(), e)))?;
    Ok(())
}

fn draw_obstacles(chart: &mut Chart<'_, '_>, scenario: &Scenario) -> Result<()> {
    chart
        .draw_series(scenario.obstacles.iter().map(|rect| {
            plotters::element::Rectangle::new([xy(&rect.min()), xy(&rect.max())], RED.filled())
        }))
        .map_err(map_err_to_draw_err)?;
    Ok(())
}

fn draw_tree_lines(chart: &mut Chart<'_, '_>, result: &RRTResult) -> Result<()> {
    chart
        .draw_series(result.tree.edges().map(|(child, parent)| {
            PathElement::new(vec![xy(&child), xy(&parent)], BLACK.mix(0.4).stroke_width(1))
        }))
        .map_err(map_err_to_draw_err)?;
    Ok(())
}

fn draw_path(chart: &mut Chart<'_, '_>, path: &[Point]) -> Result<()> {
    chart
        .draw_series(LineSeries::new(path.iter().map(xy), MAGENTA.stroke_width(3)))
        .map_err(map_err_to_draw_err)?;
    Ok(())
}

fn xy(p: &Point) -> (f64, f64) {
    (p[0], p[1])
}
