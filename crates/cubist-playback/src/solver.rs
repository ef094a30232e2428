//! Seam for the external cube solver.
//!
//! The solver is opaque: it receives a validated cube and returns its
//! solution as whitespace-separated move notation (`"R U' F2 ..."`). An empty
//! solution means the cube is already solved.

use cubist_cube::Cubestring;

use crate::error::Result;

/// An external solving service.
pub trait Solver {
    /// Solve `cube`, returning a whitespace-separated move sequence.
    fn solve(&self, cube: &Cubestring) -> Result<String>;
}

impl<F> Solver for F
where
    F: Fn(&Cubestring) -> Result<String>,
{
    fn solve(&self, cube: &Cubestring) -> Result<String> {
        self(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaybackConfig;
    use crate::error::Error;
    use crate::playback::Playback;
    use crate::surface::RecordingSurface;
    use cubist_cube::parse_sequence;

    const SCRAMBLE: &str = "R U R' U' F2";

    /// Undoes a known scramble: the reversed sequence of inverse moves.
    fn undo_scramble(_: &Cubestring) -> Result<String> {
        let moves = parse_sequence(SCRAMBLE)?;
        Ok(moves
            .iter()
            .rev()
            .map(|m| m.inverse().to_string())
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[test]
    fn session_from_solver_solves_the_cube() {
        let cube = Cubestring::solved().apply_sequence(SCRAMBLE).unwrap();
        let mut playback = Playback::from_solver(
            &undo_scramble,
            &cube,
            RecordingSurface::new(),
            PlaybackConfig::default(),
        )
        .unwrap();
        assert_eq!(playback.moves(), ["F2", "U", "R", "U'", "R'"]);

        while playback.step_forward() {}
        assert!(playback.working().is_solved());
    }

    #[test]
    fn solved_cube_is_rejected_before_solving() {
        let never = |_: &Cubestring| -> Result<String> { panic!("solver must not be called") };
        let result = Playback::from_solver(
            &never,
            &Cubestring::solved(),
            RecordingSurface::new(),
            PlaybackConfig::default(),
        );
        assert!(matches!(result, Err(Error::AlreadySolved)));
    }

    #[test]
    fn invalid_cube_is_rejected_before_solving() {
        let mut cube = Cubestring::solved();
        cube.write_face_str(cubist_cube::Face::U, "UUUUUUUUR").unwrap();
        let never = |_: &Cubestring| -> Result<String> { panic!("solver must not be called") };
        let result = Playback::from_solver(
            &never,
            &cube,
            RecordingSurface::new(),
            PlaybackConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::Cube(cubist_cube::Error::InvalidDistribution { .. }))
        ));
    }

    #[test]
    fn solver_failure_propagates() {
        let failing = |_: &Cubestring| -> Result<String> { Err(Error::Solver("no solution".into())) };
        let cube = Cubestring::solved().apply_sequence("R").unwrap();
        let result = Playback::from_solver(
            &failing,
            &cube,
            RecordingSurface::new(),
            PlaybackConfig::default(),
        );
        assert!(matches!(result, Err(Error::Solver(msg)) if msg == "no solution"));
    }
}
