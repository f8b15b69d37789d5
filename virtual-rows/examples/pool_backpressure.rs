// Example: a shared pool retains at most `limit` idle items and drops the rest.
use virtual_rows::RecyclingPool;

fn main() {
    let mut pool = RecyclingPool::new(|| Vec::<u8>::with_capacity(4096), Vec::clear, 4);

    let buffers: Vec<_> = (0..10).map(|_| pool.acquire()).collect();
    let mut retained = 0;
    for buffer in buffers {
        if pool.release(buffer) {
            retained += 1;
        }
    }
    println!("created={} retained={retained} idle={}", pool.created(), pool.count());

    let again = pool.acquire();
    println!(
        "reacquired len={} capacity>={} recycled={}",
        again.len(),
        again.capacity() >= 4096,
        pool.recycled()
    );
}
