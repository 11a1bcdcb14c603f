//! Native host queries through `libc`.

use std::path::Path;

use super::{FsSpace, HostStats, NetInterface, Uname};

/// Host statistics from the running operating system.
///
/// Battery level, low power mode and battery monitoring need UIKit (or the
/// Android framework) and have no libc source, so they keep the trait
/// defaults: unavailable, and activation is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHost;

impl NativeHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostStats for NativeHost {
    fn physical_memory(&self) -> Option<u64> {
        imp::physical_memory()
    }

    fn available_memory(&self) -> Option<u64> {
        imp::available_memory()
    }

    fn cpu_count(&self) -> Option<u32> {
        imp::cpu_count()
    }

    fn cpu_frequency(&self) -> Option<u64> {
        imp::cpu_frequency()
    }

    fn uname(&self) -> Option<Uname> {
        unix::uname()
    }

    fn filesystem_space(&self, path: &Path) -> Option<FsSpace> {
        unix::filesystem_space(path)
    }

    fn system_property(&self, key: &str) -> Option<String> {
        imp::system_property(key)
    }

    fn network_interfaces(&self) -> Option<Vec<NetInterface>> {
        unix::network_interfaces()
    }

    fn is_simulator_build(&self) -> bool {
        cfg!(all(
            target_os = "ios",
            any(target_abi = "sim", target_arch = "x86_64")
        ))
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod imp {
    use std::mem;

    fn sysinfo() -> Option<libc::sysinfo> {
        // SAFETY: sysinfo is plain old data and is fully written on success.
        let mut info: libc::sysinfo = unsafe { mem::zeroed() };
        let rc = unsafe { libc::sysinfo(&mut info) };
        (rc == 0).then_some(info)
    }

    pub fn physical_memory() -> Option<u64> {
        let info = sysinfo()?;
        (info.totalram as u64).checked_mul(info.mem_unit as u64)
    }

    pub fn available_memory() -> Option<u64> {
        let info = sysinfo()?;
        (info.freeram as u64).checked_mul(info.mem_unit as u64)
    }

    pub fn cpu_count() -> Option<u32> {
        // SAFETY: sysconf has no memory-safety preconditions.
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        u32::try_from(n).ok().filter(|&n| n > 0)
    }

    /// Linux reports frequency per core in `/proc/cpuinfo` instead.
    pub fn cpu_frequency() -> Option<u64> {
        None
    }

    #[cfg(target_os = "android")]
    pub fn system_property(key: &str) -> Option<String> {
        use std::ffi::{CStr, CString};

        let name = CString::new(key).ok()?;
        let mut value = [0 as libc::c_char; libc::PROP_VALUE_MAX as usize];
        // SAFETY: value holds PROP_VALUE_MAX bytes, the documented maximum.
        let len = unsafe { libc::__system_property_get(name.as_ptr(), value.as_mut_ptr()) };
        if len <= 0 {
            return None;
        }
        // SAFETY: __system_property_get NUL-terminates the value.
        let value = unsafe { CStr::from_ptr(value.as_ptr()) };
        Some(value.to_string_lossy().into_owned())
    }

    #[cfg(not(target_os = "android"))]
    pub fn system_property(_key: &str) -> Option<String> {
        None
    }
}

#[cfg(target_vendor = "apple")]
mod imp {
    use std::ffi::{CStr, CString};
    use std::{mem, ptr};

    fn sysctl_value<T: Copy + Default>(name: &CStr) -> Option<T> {
        let mut value = T::default();
        let mut size = mem::size_of::<T>();
        // SAFETY: value is a writable buffer of exactly `size` bytes.
        let rc = unsafe {
            libc::sysctlbyname(
                name.as_ptr(),
                (&mut value as *mut T).cast(),
                &mut size,
                ptr::null_mut(),
                0,
            )
        };
        (rc == 0 && size == mem::size_of::<T>()).then_some(value)
    }

    fn sysctl_string(name: &CStr) -> Option<String> {
        let mut size = 0usize;
        // SAFETY: a null buffer asks only for the required size.
        let rc = unsafe {
            libc::sysctlbyname(
                name.as_ptr(),
                ptr::null_mut(),
                &mut size,
                ptr::null_mut(),
                0,
            )
        };
        if rc != 0 || size == 0 {
            return None;
        }

        let mut buf = vec![0u8; size];
        // SAFETY: buf is writable for `size` bytes.
        let rc = unsafe {
            libc::sysctlbyname(
                name.as_ptr(),
                buf.as_mut_ptr().cast(),
                &mut size,
                ptr::null_mut(),
                0,
            )
        };
        if rc != 0 {
            return None;
        }
        buf.truncate(size);
        while buf.last() == Some(&0) {
            buf.pop();
        }
        String::from_utf8(buf).ok().filter(|s| !s.is_empty())
    }

    pub fn physical_memory() -> Option<u64> {
        sysctl_value::<u64>(c"hw.memsize")
    }

    #[allow(deprecated)]
    pub fn available_memory() -> Option<u64> {
        // SAFETY: vm_statistics64 is plain old data.
        let mut stats: libc::vm_statistics64 = unsafe { mem::zeroed() };
        let mut count = libc::HOST_VM_INFO64_COUNT;
        // SAFETY: stats is large enough for HOST_VM_INFO64_COUNT integers.
        let rc = unsafe {
            libc::host_statistics64(
                libc::mach_host_self(),
                libc::HOST_VM_INFO64,
                (&mut stats as *mut libc::vm_statistics64).cast(),
                &mut count,
            )
        };
        if rc != libc::KERN_SUCCESS {
            return None;
        }

        // SAFETY: sysconf has no memory-safety preconditions.
        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        let page_size = u64::try_from(page_size).ok().filter(|&p| p > 0)?;
        (stats.free_count as u64).checked_mul(page_size)
    }

    pub fn cpu_count() -> Option<u32> {
        sysctl_value::<i32>(c"hw.ncpu").and_then(|n| u32::try_from(n).ok())
    }

    /// Not published on Apple silicon; only older hardware answers.
    pub fn cpu_frequency() -> Option<u64> {
        sysctl_value::<u64>(c"hw.cpufrequency").filter(|&hz| hz > 0)
    }

    pub fn system_property(key: &str) -> Option<String> {
        let name = CString::new(key).ok()?;
        sysctl_string(&name)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
mod imp {
    pub fn physical_memory() -> Option<u64> {
        None
    }

    pub fn available_memory() -> Option<u64> {
        None
    }

    pub fn cpu_count() -> Option<u32> {
        None
    }

    pub fn cpu_frequency() -> Option<u64> {
        None
    }

    pub fn system_property(_key: &str) -> Option<String> {
        None
    }
}

#[cfg(unix)]
mod unix {
    use std::ffi::{CStr, CString};
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;
    use std::{mem, ptr};

    use super::{FsSpace, NetInterface, Uname};

    fn c_field(field: &[libc::c_char]) -> String {
        let bytes: Vec<u8> = field
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn uname() -> Option<Uname> {
        // SAFETY: utsname is plain old data and is fully written on success.
        let mut buf: libc::utsname = unsafe { mem::zeroed() };
        if unsafe { libc::uname(&mut buf) } != 0 {
            return None;
        }
        Some(Uname {
            sysname: c_field(&buf.sysname),
            nodename: c_field(&buf.nodename),
            release: c_field(&buf.release),
            version: c_field(&buf.version),
            machine: c_field(&buf.machine),
        })
    }

    pub fn filesystem_space(path: &Path) -> Option<FsSpace> {
        let c_path = CString::new(path.as_os_str().as_bytes()).ok()?;
        // SAFETY: statvfs is plain old data and is fully written on success.
        let mut st: libc::statvfs = unsafe { mem::zeroed() };
        if unsafe { libc::statvfs(c_path.as_ptr(), &mut st) } != 0 {
            return None;
        }
        let fragment = st.f_frsize as u64;
        Some(FsSpace {
            total: (st.f_blocks as u64).checked_mul(fragment),
            free: (st.f_bavail as u64).checked_mul(fragment),
        })
    }

    /// Owns the list returned by `getifaddrs` and frees it on drop.
    struct IfAddrs(*mut libc::ifaddrs);

    impl Drop for IfAddrs {
        fn drop(&mut self) {
            // SAFETY: the pointer came from a successful getifaddrs call.
            unsafe { libc::freeifaddrs(self.0) }
        }
    }

    pub fn network_interfaces() -> Option<Vec<NetInterface>> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();
        // SAFETY: head is a valid out-pointer.
        if unsafe { libc::getifaddrs(&mut head) } != 0 {
            return None;
        }
        let list = IfAddrs(head);

        let mut interfaces: Vec<NetInterface> = Vec::new();
        let mut cursor = list.0;
        while !cursor.is_null() {
            // SAFETY: cursor walks the list owned by `list`, alive until drop.
            let entry = unsafe { &*cursor };
            cursor = entry.ifa_next;
            if entry.ifa_name.is_null() {
                continue;
            }

            // SAFETY: ifa_name is a NUL-terminated string owned by the list.
            let name = unsafe { CStr::from_ptr(entry.ifa_name) }
                .to_string_lossy()
                .into_owned();
            let flags = entry.ifa_flags as libc::c_int;
            let is_up = flags & libc::IFF_UP != 0 && flags & libc::IFF_RUNNING != 0;

            // One entry per address family; merge them per interface.
            match interfaces.iter_mut().find(|i| i.name == name) {
                Some(existing) => existing.is_up |= is_up,
                None => interfaces.push(NetInterface { name, is_up }),
            }
        }

        Some(interfaces)
    }
}

#[cfg(not(unix))]
mod unix {
    use std::path::Path;

    use super::{FsSpace, NetInterface, Uname};

    pub fn uname() -> Option<Uname> {
        None
    }

    pub fn filesystem_space(_path: &Path) -> Option<FsSpace> {
        None
    }

    pub fn network_interfaces() -> Option<Vec<NetInterface>> {
        None
    }
}
