pub(crate) mod settings;

use geo_along_lib::{AlongError, GeoPath, GeoPoint, point_at_distance, sample_every};
use settings::{Command, Settings};
use std::io::Write;

/// Errors that end a run
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Along(#[from] AlongError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct GeoAlongApp {
    settings: Settings,
}

impl GeoAlongApp {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the selected command, writing results to `out`
    pub fn run(&self, out: &mut impl Write) -> Result<(), AppError> {
        profiling::scope!("app::run");

        let path = GeoPath::from_lon_lat(self.settings.coords.iter().copied())?;
        let units = self.settings.units;
        tracing::info!("Loaded path with {} points, working in {units}", path.len());

        match self.settings.command() {
            Command::At(distance) => {
                let point = point_at_distance(&path, distance, units)?;
                write_point(out, point)?;
            }
            Command::Sample(step) => {
                let points = sample_every(&path, step, units)?;
                tracing::info!("Sampled {} points every {step} {units}", points.len());
                for point in points {
                    write_point(out, point)?;
                }
            }
            Command::Length => {
                writeln!(out, "{:.6}", path.length(units))?;
            }
        }

        Ok(())
    }
}

fn write_point(out: &mut impl Write, point: GeoPoint) -> std::io::Result<()> {
    writeln!(out, "{:.6} {:.6}", point.x(), point.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> Result<String, AppError> {
        let settings = Settings::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        GeoAlongApp::new(settings).run(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_point_at_distance() {
        let output = run(&[
            "geo-along", "-c", "-83,30", "-c", "-84,36", "-c", "-78,41", "-d", "200", "-u",
            "miles",
        ])
        .unwrap();
        assert_eq!(output, "-83.460865 32.867810\n");
    }

    #[test]
    fn test_clamps_to_ends() {
        let output = run(&[
            "geo-along", "-c", "0,0", "-c", "1,1", "-d", "10000", "-u", "kilometers",
        ])
        .unwrap();
        assert_eq!(output, "1.000000 1.000000\n");

        let output = run(&[
            "geo-along", "-c", "0,0", "-c", "1,1", "-d", "0", "-u", "kilometers",
        ])
        .unwrap();
        assert_eq!(output, "0.000000 0.000000\n");
    }

    #[test]
    fn test_length() {
        let output = run(&[
            "geo-along", "-c", "0,0", "-c", "1,0", "--length", "-u", "kilometers",
        ])
        .unwrap();
        assert_eq!(output, "111.195080\n");
    }

    #[test]
    fn test_sample() {
        let output = run(&[
            "geo-along", "-c", "0,0", "-c", "1,1", "--step", "50", "-u", "kilometers",
        ])
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "0.000000 0.000000");
        assert_eq!(lines[4], "1.000000 1.000000");
    }

    #[test]
    fn test_invalid_coordinate_fails() {
        let result = run(&["geo-along", "-c", "0,0", "-c", "200,0", "-d", "1"]);
        assert!(matches!(
            result,
            Err(AppError::Along(AlongError::InvalidCoordinate { index: 1, .. }))
        ));
    }

    #[test]
    fn test_invalid_step_fails() {
        let result = run(&["geo-along", "-c", "0,0", "-c", "1,1", "--step", "0"]);
        assert!(matches!(
            result,
            Err(AppError::Along(AlongError::InvalidDistance(_)))
        ));
    }
}
