use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Debug;
use std::hint::black_box;
use std::marker::PhantomData;
use sudoku_solver::sudoku::grid::{EXAMPLE_CLASSIC, EXAMPLE_HARD, Grid};
use sudoku_solver::sudoku::search::Backtrack;
use sudoku_solver::sudoku::solver::{Solver, SolverConfig};
use sudoku_solver::sudoku::variable_selection::{
    FixedOrder, MostConstrained, VariableSelection,
};

#[derive(Debug, Clone)]
struct SelectorConfig<V: VariableSelection>(PhantomData<V>);

impl<V: VariableSelection + Clone + Debug> SolverConfig for SelectorConfig<V> {
    type VariableSelector = V;
}

fn bench_classic(c: &mut Criterion) {
    let puzzle = Grid::new(EXAMPLE_CLASSIC).unwrap();

    c.bench_function("classic - most constrained", |b| {
        b.iter(|| {
            let mut engine: Backtrack<SelectorConfig<MostConstrained>> =
                Solver::new(puzzle.clone());
            let solution = engine.solve();
            black_box(solution);
        })
    });

    c.bench_function("classic - fixed order", |b| {
        b.iter(|| {
            let mut engine: Backtrack<SelectorConfig<FixedOrder>> = Solver::new(puzzle.clone());
            let solution = engine.solve();
            black_box(solution);
        })
    });
}

fn bench_hard(c: &mut Criterion) {
    let puzzle = Grid::new(EXAMPLE_HARD).unwrap();

    c.bench_function("hard - most constrained", |b| {
        b.iter(|| {
            let mut engine: Backtrack<SelectorConfig<MostConstrained>> =
                Solver::new(puzzle.clone());
            let solution = engine.solve();
            black_box(solution);
        })
    });
}

criterion_group!(benches, bench_classic, bench_hard);
criterion_main!(benches);
