use super::FileError;
use crate::spatial::Point;

use nom::{
    character::complete::{self, line_ending},
    combinator::map,
    multi::separated_list1,
    number::complete::double,
    sequence::separated_pair,
};

// parser for a plain point list: one "x y" pair per line

pub fn pts_to_points(file: &str) -> Result<Vec<Point>, FileError> {
    let point = map(
        separated_pair(double, complete::char(' '), double),
        |(x, y): (f64, f64)| Point::new(x, y),
    );

    let mut parser = separated_list1(line_ending, point);

    let (rem, points) = parser(file.trim_end())
        .map_err(|_e: nom::Err<nom::error::Error<_>>| FileError::parse("parse error"))?;
    if !rem.is_empty() {
        Err(FileError::parse("parser did not consume entire file"))
    } else {
        Ok(points)
    }
}

pub fn points_to_pts<'a, T: Iterator<Item = &'a Point>>(points: T) -> String {
    let mut res = String::new();
    for p in points {
        res.push_str(&format!("{} {}\n", p.x, p.y));
    }
    res
}
