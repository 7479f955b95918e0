/// Percentage lower bounds, highest first.
pub const GRADE_BOUNDARIES: [(f64, &str); 12] = [
    (95.0, "A+"),
    (90.0, "A"),
    (85.0, "A-"),
    (80.0, "B+"),
    (75.0, "B"),
    (70.0, "B-"),
    (65.0, "C+"),
    (60.0, "C"),
    (55.0, "C-"),
    (50.0, "D+"),
    (45.0, "D"),
    (40.0, "D-"),
];

pub const FAILING_GRADE: &str = "F";

pub fn grade_for(percentage: f64) -> &'static str {
    GRADE_BOUNDARIES
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(FAILING_GRADE)
}
