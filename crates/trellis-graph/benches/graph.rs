use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trellis_graph::{AuthorStyles, Commit, HashPool, pipe_sets, render_commit_graph, render_rows};

const AUTHORS: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

/// A random history of `count` commits, children before parents.
fn generate_commits(pool: &mut HashPool, count: usize) -> Vec<Commit> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pending = vec![Commit::new(pool.intern("a"), vec![]).with_author(AUTHORS[0])];
    let mut commits = Vec::with_capacity(count);

    while commits.len() < count && !pending.is_empty() {
        let mut current = pending.remove(rng.gen_range(0..pending.len()));
        for j in 0..rng.gen_range(1..=2) {
            let parent = if j != 0 && j < pending.len() && rng.gen_range(0..6) != 1 {
                pending[j].hash
            } else {
                let name = format!("{}{j}", pool.resolve(current.hash));
                let author = AUTHORS[rng.gen_range(0..AUTHORS.len())];
                let parent = Commit::new(pool.intern(&name), vec![]).with_author(author);
                let hash = parent.hash;
                pending.push(parent);
                hash
            };
            current.parents.push(parent);
        }
        commits.push(current);
    }

    commits
}

fn bench_render_commit_graph(c: &mut Criterion) {
    let mut pool = HashPool::new();
    let commits = generate_commits(&mut pool, 50);
    let selected = Some(commits[10].hash);
    let authors = AuthorStyles::new();
    let style_of = |commit: &Commit| authors.style_for(&commit.author_name);

    let mut group = c.benchmark_group("graph");
    group.throughput(Throughput::Elements(commits.len() as u64));

    group.bench_function("render_commit_graph", |b| {
        b.iter(|| black_box(render_commit_graph(&pool, black_box(&commits), selected, style_of)));
    });

    group.bench_function("pipe_sets", |b| {
        b.iter(|| black_box(pipe_sets(&pool, black_box(&commits), style_of)));
    });

    let sets = pipe_sets(&pool, &commits, style_of);
    group.bench_function("render_rows", |b| {
        b.iter(|| black_box(render_rows(black_box(&sets), selected)));
    });

    group.finish();
}

criterion_group!(benches, bench_render_commit_graph);
criterion_main!(benches);
