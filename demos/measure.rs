use perf_group_session::count::CounterGroupSession;
use perf_group_session::report::report;
use tracing_subscriber::EnvFilter;

fn fib(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => fib(n - 1) + fib(n - 2),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = CounterGroupSession::default_profile();
    if let Err(e) = session.start() {
        println!("{}", report(&Err(e)));
        return;
    }

    std::hint::black_box(fib(30));

    let result = session.stop();
    println!("Perf Results: {}", report(&result));
}
