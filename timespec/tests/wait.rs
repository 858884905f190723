use std::time::{Duration, Instant};
use timespec::{Error, Sleeper, Timespec};

#[test]
fn wait() {
    let delay = Timespec::new(0, 50_000_000);

    let start = Instant::now();
    timespec::wait(delay).unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(50), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(5), "{elapsed:?}");
}

#[test]
fn wait_negative() {
    assert!(matches!(
        timespec::wait(Timespec::from_millis_f64(-1500.0)),
        Err(Error::Sleep(_))
    ));
}

#[cfg(target_os = "linux")]
mod interrupt {
    use super::*;

    extern "C" fn noop(_: libc::c_int) {}

    fn install_handler() {
        unsafe {
            let mut action: libc::sigaction = core::mem::zeroed();
            action.sa_sigaction = noop as extern "C" fn(libc::c_int) as libc::sighandler_t;
            action.sa_flags = 0;
            libc::sigemptyset(&mut action.sa_mask);
            assert_eq!(
                libc::sigaction(libc::SIGUSR1, &action, core::ptr::null_mut()),
                0
            );
        }
    }

    // signal the calling thread once after `after` has passed
    fn signal_after(after: Duration) -> std::thread::JoinHandle<()> {
        let target = unsafe { libc::pthread_self() };
        std::thread::spawn(move || {
            std::thread::sleep(after);
            unsafe {
                libc::pthread_kill(target, libc::SIGUSR1);
            }
        })
    }

    #[test]
    fn reported() {
        install_handler();

        let delay = Timespec::from_secs(2);
        let signaller = signal_after(Duration::from_millis(100));

        let result = Sleeper::default().wait(delay);
        signaller.join().unwrap();

        match result {
            Err(Error::Interrupted { remaining }) => {
                assert!(remaining.is_normalized());
                assert!(remaining > Timespec::ZERO);
                assert!(remaining < delay);
            }
            other => panic!("expected an interrupted sleep, got: {other:?}"),
        }
    }

    #[test]
    fn resumed() {
        install_handler();

        let sleeper = Sleeper::builder().resume_on_interrupt(true).build();
        let signaller = signal_after(Duration::from_millis(50));

        let start = Instant::now();
        sleeper.wait(Timespec::from_millis(300)).unwrap();
        let elapsed = start.elapsed();
        signaller.join().unwrap();

        assert!(elapsed >= Duration::from_millis(300), "{elapsed:?}");
    }
}
